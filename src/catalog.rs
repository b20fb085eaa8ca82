//! In-memory catalog holding the full item list and the item picked for preview.

use std::borrow::Borrow;

use crate::actor_framework::Entity;
use crate::domain::Product;

/// The catalog used by the storefront.
pub type ProductCatalog = Catalog<Product>;

/// Ordered collection of entities plus one optional "preview" entity.
///
/// The preview is not required to be a member of `items`. Nothing keeps the
/// two in sync; callers decide what to preview.
#[derive(Debug, Clone)]
pub struct Catalog<T: Entity> {
    items: Vec<T>,
    preview: Option<T>,
}

impl<T: Entity> Default for Catalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Catalog<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            preview: None,
        }
    }

    /// Replaces the whole collection. The preview is left as it is.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.items = items.into_iter().collect();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the first item whose id matches, in insertion order.
    pub fn get<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter().find(|item| Borrow::<Q>::borrow(item.id()) == id)
    }

    pub fn set_preview(&mut self, item: T) {
        self.preview = Some(item);
    }

    pub fn preview(&self) -> Option<&T> {
        self.preview.as_ref()
    }

    /// Drops the current preview, returning it if there was one.
    pub fn clear_preview(&mut self) -> Option<T> {
        self.preview.take()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ProductCatalog {
    pub fn get_items(&self) -> &[Product] {
        self.items()
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.get(id)
    }

    pub fn get_preview(&self) -> Option<&Product> {
        self.preview()
    }
}
