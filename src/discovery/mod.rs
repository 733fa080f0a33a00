//! Discovery layer: builds the dependency map from entity metadata sources
//!
//! The domain core has no opinion on where entity definitions come from;
//! this layer supplies the production source (TOML model files).

pub mod catalog;
pub mod error;

pub use catalog::{CatalogDiscovery, EntityDef, FieldDef};
pub use error::{DiscoveryError, DiscoveryResult};
