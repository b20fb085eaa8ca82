//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_set_preview`] to assert behavior.

use tokio::sync::mpsc;

use crate::actor_framework::{CatalogClient, CatalogRequest, Entity, Response};

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it pulls each request off `receiver`, checks it
/// and answers through the request's responder.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (CatalogClient<T>, mpsc::Receiver<CatalogRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a SetItems request
pub async fn expect_set_items<T: Entity>(receiver: &mut mpsc::Receiver<CatalogRequest<T>>) -> Option<(Vec<T>, Response<()>)> {
    match receiver.recv().await {
        Some(CatalogRequest::SetItems { items, respond_to }) => Some((items, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<CatalogRequest<T>>) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SetPreview request
pub async fn expect_set_preview<T: Entity>(receiver: &mut mpsc::Receiver<CatalogRequest<T>>) -> Option<(T, Response<()>)> {
    match receiver.recv().await {
        Some(CatalogRequest::SetPreview { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let get_task = tokio::spawn(async move { client.get("p1".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "p1");
        responder.send(Ok(Some(Product::new("p1", "Mug", Some(5.0))))).unwrap();

        let result = get_task.await.unwrap().unwrap();
        assert_eq!(result.map(|p| p.title), Some("Mug".to_string()));
    }
}
