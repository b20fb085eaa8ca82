use tracing::{error, info, warn};

use crate::actor_framework::CatalogActor;
use crate::clients::ProductCatalogClient;
use crate::domain::Product;
use crate::product_actor::CatalogError;
use super::CatalogConfig;

/// Owns the running catalog actor and hands out its client.
pub struct CatalogSystem {
    pub catalog_client: ProductCatalogClient,
    handle: tokio::task::JoinHandle<()>,
    config: CatalogConfig,
}

impl CatalogSystem {
    /// Spawns the catalog actor. Must be called inside a tokio runtime.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        info!(buffer_size = config.buffer_size, "Starting catalog system");

        let (actor, client) = CatalogActor::<Product>::new(config.buffer_size);
        let handle = tokio::spawn(actor.run());

        Ok(Self {
            catalog_client: ProductCatalogClient::new(client),
            handle,
            config,
        })
    }

    /// Closes the mailbox and waits for the actor to drain it.
    ///
    /// Clones of `catalog_client` held elsewhere keep the mailbox open. If the
    /// actor has not stopped within `shutdown_timeout` it is aborted and
    /// `CatalogError::Shutdown` is returned.
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog system...");
        drop(self.catalog_client);

        let mut handle = self.handle;
        match tokio::time::timeout(self.config.shutdown_timeout, &mut handle).await {
            Ok(Ok(())) => {
                info!("Catalog system shutdown complete.");
                Ok(())
            }
            Ok(Err(e)) => {
                error!("Catalog actor task failed: {:?}", e);
                Err(CatalogError::Shutdown(format!("Catalog actor task failed: {:?}", e)))
            }
            Err(_) => {
                warn!(timeout = ?self.config.shutdown_timeout, "Catalog clients still alive, aborting actor");
                handle.abort();
                Err(CatalogError::Shutdown("Catalog actor did not stop: clients still alive".to_string()))
            }
        }
    }
}
