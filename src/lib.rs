pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::export::{render, OutputFormat};
pub use domain::catalog::{cars, data, Catalog};
pub use domain::model::Vehicle;
pub use utils::error::{CatalogError, Result};
pub use utils::validation::Validate;
