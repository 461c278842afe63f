//! taskmart-ingest: catalogue CSV parsing and the one-shot cached load.

pub mod catalogue;
pub mod loader;

pub use catalogue::{Catalogue, CatalogueCache, CatalogueSource, load_catalogue};
pub use loader::parse_catalogue;
