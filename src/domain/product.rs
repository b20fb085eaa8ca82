use serde::{Deserialize, Serialize};

use crate::product_actor::CatalogError;

/// A storefront product as delivered by the product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    /// `None` marks a product that is not for sale.
    pub price: Option<f64>,
}

/// Listing envelope: `{ "total": n, "items": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    pub total: usize,
    pub items: Vec<Product>,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            category: String::new(),
            price,
        }
    }
}

impl ProductList {
    /// Decodes a listing from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}
