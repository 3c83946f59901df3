pub mod catalog;
pub mod loader;

pub use catalog::{marker_size, EventCatalog, QuakeEvent};
pub use loader::{load_catalog, parse_catalog};
