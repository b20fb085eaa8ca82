#[cfg(test)]
mod tests {
    use crate::actor_framework::FrameworkError;
    use crate::app_system::{CatalogConfig, CatalogSystem};
    use crate::clients::ProductCatalogClient;
    use crate::domain::{Product, ProductList};
    use crate::mock_framework::{create_mock_client, expect_get, expect_set_items, expect_set_preview};
    use crate::product_actor::CatalogError;

    fn listing() -> ProductList {
        ProductList {
            total: 3,
            items: vec![
                Product::new("a", "Frontend Backpack", Some(750.0)),
                Product::new("b", "Priceless Mascot", None),
                Product::new("c", "Pixel Cap", Some(100.0)),
            ],
        }
    }

    #[tokio::test]
    async fn test_select_preview_flow() {
        // 1. Setup Mocks
        let (inner, mut rx) = create_mock_client::<Product>(10);
        let client = ProductCatalogClient::new(inner);

        // 2. Execute selection in background
        let task = tokio::spawn(async move { client.select_preview("b").await });

        // 3. Verify Interactions

        // Expect lookup
        let (id, responder) = expect_get(&mut rx).await.expect("Expected Get");
        assert_eq!(id, "b");
        responder.send(Ok(Some(Product::new("b", "Priceless Mascot", None)))).unwrap();

        // Expect preview to be stored
        let (item, responder) = expect_set_preview(&mut rx).await.expect("Expected SetPreview");
        assert_eq!(item.id, "b");
        responder.send(Ok(())).unwrap();

        // 4. Verify Result
        let result = task.await.unwrap().unwrap();
        assert_eq!(result.map(|p| p.title), Some("Priceless Mascot".to_string()));
    }

    #[tokio::test]
    async fn test_select_preview_miss_leaves_preview_alone() {
        let (inner, mut rx) = create_mock_client::<Product>(10);
        let client = ProductCatalogClient::new(inner);

        let task = tokio::spawn(async move { client.select_preview("zzz").await });

        let (_, responder) = expect_get(&mut rx).await.expect("Expected Get");
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(None));
        // The client dropped with the task; no SetPreview was ever sent.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_load_listing_sends_items() {
        let (inner, mut rx) = create_mock_client::<Product>(10);
        let client = ProductCatalogClient::new(inner);

        let task = tokio::spawn(async move { client.load_listing(listing()).await });

        let (items, responder) = expect_set_items(&mut rx).await.expect("Expected SetItems");
        let ids: Vec<_> = items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        responder.send(Ok(())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(3));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (inner, mut rx) = create_mock_client::<Product>(10);
        let client = ProductCatalogClient::new(inner);

        let task = tokio::spawn(async move { client.get_product("a").await });

        let (_, responder) = expect_get(&mut rx).await.expect("Expected Get");
        drop(responder);

        assert_eq!(
            task.await.unwrap(),
            Err(CatalogError::ActorCommunicationError(FrameworkError::ActorDropped.to_string()))
        );
    }

    #[tokio::test]
    async fn test_full_system_scenario() {
        let system = CatalogSystem::new(CatalogConfig::default()).unwrap();
        let client = system.catalog_client.clone();

        // Fresh system
        assert!(client.get_items().await.unwrap().is_empty());
        assert_eq!(client.get_preview().await.unwrap(), None);
        assert_eq!(client.get_product("a").await.unwrap(), None);

        // Load and look up
        let expected = listing().items;
        assert_eq!(client.load_listing(listing()).await.unwrap(), 3);
        assert_eq!(client.get_items().await.unwrap(), expected);

        let b = client.get_product("b").await.unwrap().unwrap();
        assert_eq!(b, expected[1]);
        assert_eq!(client.get_product("missing").await.unwrap(), None);

        // Select, then replace the items: the preview survives
        assert_eq!(client.select_preview("b").await.unwrap(), Some(b.clone()));
        client.set_items(Vec::new()).await.unwrap();
        assert_eq!(client.get_preview().await.unwrap(), Some(b.clone()));

        // A miss does not clear the preview
        assert_eq!(client.select_preview("a").await.unwrap(), None);
        assert_eq!(client.get_preview().await.unwrap(), Some(b.clone()));

        // Preview of an unlisted product
        let outsider = Product::new("x", "Gift Card", Some(1.0));
        client.set_preview(outsider.clone()).await.unwrap();
        assert_eq!(client.clear_preview().await.unwrap(), Some(outsider));
        assert_eq!(client.get_preview().await.unwrap(), None);

        drop(client);
        system.shutdown().await.unwrap();
    }
}
