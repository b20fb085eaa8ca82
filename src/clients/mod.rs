//! Typed clients layered over the generic catalog actor.

pub mod product_client;

pub use product_client::*;
