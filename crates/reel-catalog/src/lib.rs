//! Movie catalog service implementation.
//!
//! This crate ties the validator, an id [`Generator`](reel_generator::Generator)
//! and a [`Repository`](reel_core::Repository) together behind the
//! [`Catalog`](reel_core::Catalog) trait the HTTP layer depends on.

pub mod service;

pub use service::CatalogService;
