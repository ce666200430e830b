pub mod dataset;
pub mod source;

pub use dataset::StaticCatalog;
pub use source::{CatalogError, CatalogSource};
