pub mod error;
pub mod model;
pub mod service;

pub use error::CatalogServiceError;
pub use model::{Item, ListItemsQuery};
pub use service::{CatalogService, CatalogServiceApi};
