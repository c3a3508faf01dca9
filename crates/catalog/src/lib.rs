//! Static inventory catalog (supplier → items).
//!
//! This crate contains the authoritative item→supplier data, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod data;

pub use catalog::{Catalog, CatalogError, InventoryItem, Supplier};
pub use data::BUILTIN_ITEMS;
