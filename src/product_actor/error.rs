use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors surfaced by the product catalog client and system.
///
/// A product that is not in the catalog is not an error; lookups return `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
    #[error("Product listing decode error: {0}")]
    Decode(String),
    #[error("Catalog configuration error: {0}")]
    Config(String),
    #[error("Catalog shutdown error: {0}")]
    Shutdown(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        CatalogError::ActorCommunicationError(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Decode(e.to_string())
    }
}
