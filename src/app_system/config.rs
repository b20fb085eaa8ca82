use std::time::Duration;

use tokio::sync::Semaphore;

use crate::product_actor::CatalogError;

/// Environment variable holding the catalog actor's mailbox size.
pub const BUFFER_SIZE_ENV: &str = "CATALOG_CHANNEL_BUFFER";

const DEFAULT_BUFFER_SIZE: usize = 32;
const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runtime settings for [`CatalogSystem`](super::CatalogSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Mailbox size, `1..=Semaphore::MAX_PERMITS` (tokio's channel limit).
    pub buffer_size: usize,
    /// How long shutdown waits for the actor before aborting it.
    pub shutdown_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Reads overrides from the environment, keeping defaults for unset values.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CatalogError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_SIZE_ENV) {
            config.buffer_size = raw.trim().parse().map_err(|_| {
                CatalogError::Config(format!("{BUFFER_SIZE_ENV} must be a positive integer, got {raw:?}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks values that would otherwise panic when the actor is spawned.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.buffer_size == 0 {
            return Err(CatalogError::Config(format!("{BUFFER_SIZE_ENV} must be greater than zero")));
        }
        if self.buffer_size > Semaphore::MAX_PERMITS {
            return Err(CatalogError::Config(format!(
                "{BUFFER_SIZE_ENV} must be at most {}, got {}",
                Semaphore::MAX_PERMITS,
                self.buffer_size
            )));
        }
        Ok(())
    }
}
