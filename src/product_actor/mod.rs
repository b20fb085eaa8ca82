//! Product-specific glue between the storefront domain and the catalog actor.

pub mod entity;
pub mod error;

pub use error::*;
