//! # Product Catalog
//!
//! In-memory storefront catalog: the full product list plus the one product
//! picked for detailed display.
//!
//! - [`catalog::ProductCatalog`] is the plain synchronous store.
//! - [`actor_framework::CatalogActor`] owns a catalog on a tokio task so it can
//!   be shared; [`clients::ProductCatalogClient`] is the typed handle to it.
//! - [`app_system::CatalogSystem`] wires the actor up and shuts it down.

pub mod actor_framework;
pub mod app_system;
pub mod catalog;
pub mod clients;
pub mod domain;
pub mod product_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
