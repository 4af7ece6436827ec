pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::CatalogConfig;

pub use crate::core::catalog::{VariantCatalog, VariantSpec};
pub use crate::core::dispatch::{
    animal_leg_count, animal_sound, dispatch, draw_all, CapabilityRegistry,
};
pub use crate::core::{discount::DiscountChain, facade::AnimalFacade, http::Http};
pub use utils::error::{Result, SolidError};
