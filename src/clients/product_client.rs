use tracing::{debug, info, instrument};

use crate::actor_framework::CatalogClient;
use crate::domain::{Product, ProductList};
use crate::product_actor::CatalogError;

/// Client for interacting with the product catalog actor.
///
/// Every call returns owned copies; nothing handed out aliases the stored
/// catalog.
#[derive(Clone)]
pub struct ProductCatalogClient {
    inner: CatalogClient<Product>,
}

impl ProductCatalogClient {
    pub fn new(inner: CatalogClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn set_items(&self, items: Vec<Product>) -> Result<(), CatalogError> {
        debug!("Sending request");
        Ok(self.inner.set_items(items).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_items(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.get_items().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.get(id.to_string()).await?)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn set_preview(&self, product: Product) -> Result<(), CatalogError> {
        debug!("Sending request");
        Ok(self.inner.set_preview(product).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_preview(&self) -> Result<Option<Product>, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.get_preview().await?)
    }

    #[instrument(skip(self))]
    pub async fn clear_preview(&self) -> Result<Option<Product>, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.clear_preview().await?)
    }

    /// Stores every item of a listing, returning how many were stored.
    ///
    /// The listing's `total` is informational and is not checked against the
    /// number of items.
    #[instrument(skip(self, listing), fields(total = listing.total))]
    pub async fn load_listing(&self, listing: ProductList) -> Result<usize, CatalogError> {
        let count = listing.items.len();
        self.set_items(listing.items).await?;
        info!(count, "Listing loaded");
        Ok(count)
    }

    /// Looks a product up and, if found, makes it the preview.
    ///
    /// On a miss the current preview is left untouched.
    #[instrument(skip(self))]
    pub async fn select_preview(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        let Some(product) = self.get_product(id).await? else {
            debug!("Product not found, preview unchanged");
            return Ok(None);
        };

        self.set_preview(product.clone()).await?;
        info!(product_title = %product.title, "Preview selected");
        Ok(Some(product))
    }
}
