use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::catalog::Catalog;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any item must implement to be held by a [`Catalog`]
pub trait Entity: Clone + Send + Sync + Debug + 'static {
    type Id: PartialEq + Clone + Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;
}

/// Transport failures between a client and its actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum CatalogRequest<T: Entity> {
    SetItems {
        items: Vec<T>,
        respond_to: Response<()>,
    },
    GetItems {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    SetPreview {
        item: T,
        respond_to: Response<()>,
    },
    GetPreview {
        respond_to: Response<Option<T>>,
    },
    ClearPreview {
        respond_to: Response<Option<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one [`Catalog`] and serves requests in arrival order.
pub struct CatalogActor<T: Entity> {
    receiver: mpsc::Receiver<CatalogRequest<T>>,
    catalog: Catalog<T>,
}

impl<T: Entity> CatalogActor<T> {
    pub fn new(buffer_size: usize) -> (Self, CatalogClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            catalog: Catalog::new(),
        };
        let client = CatalogClient::new(sender);
        (actor, client)
    }

    /// Runs until every client has been dropped.
    pub async fn run(mut self) {
        info!("CatalogActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::SetItems { items, respond_to } => {
                    debug!(count = items.len(), "Replacing catalog items");
                    self.catalog.set_items(items);
                    let _ = respond_to.send(Ok(()));
                }
                CatalogRequest::GetItems { respond_to } => {
                    let _ = respond_to.send(Ok(self.catalog.items().to_vec()));
                }
                CatalogRequest::Get { id, respond_to } => {
                    let item = self.catalog.get(&id).cloned();
                    if item.is_none() {
                        debug!(id = ?id, "Item not found");
                    }
                    let _ = respond_to.send(Ok(item));
                }
                CatalogRequest::SetPreview { item, respond_to } => {
                    debug!(id = ?item.id(), "Setting preview");
                    self.catalog.set_preview(item);
                    let _ = respond_to.send(Ok(()));
                }
                CatalogRequest::GetPreview { respond_to } => {
                    let _ = respond_to.send(Ok(self.catalog.preview().cloned()));
                }
                CatalogRequest::ClearPreview { respond_to } => {
                    let _ = respond_to.send(Ok(self.catalog.clear_preview()));
                }
            }
        }
        info!("CatalogActor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct CatalogClient<T: Entity> {
    sender: mpsc::Sender<CatalogRequest<T>>,
}

impl<T: Entity> CatalogClient<T> {
    pub fn new(sender: mpsc::Sender<CatalogRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> CatalogRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn set_items(&self, items: Vec<T>) -> Result<(), FrameworkError> {
        self.request(|respond_to| CatalogRequest::SetItems { items, respond_to }).await
    }

    pub async fn get_items(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| CatalogRequest::GetItems { respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| CatalogRequest::Get { id, respond_to }).await
    }

    pub async fn set_preview(&self, item: T) -> Result<(), FrameworkError> {
        self.request(|respond_to| CatalogRequest::SetPreview { item, respond_to }).await
    }

    pub async fn get_preview(&self) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| CatalogRequest::GetPreview { respond_to }).await
    }

    pub async fn clear_preview(&self) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| CatalogRequest::ClearPreview { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
