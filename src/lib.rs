pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BuiltinCatalog, CatalogSource, FileCatalog, HttpCatalog};
pub use config::cli::LocalPantryStore;
pub use config::toml_config::AppConfig;
pub use core::{
    details::{lookup_details, RecipeKey},
    engine::PantryEngine,
    matcher::{match_recipes, normalize, MatchMode, PantryMatcher},
    pantry::Pantry,
};
pub use domain::model::{MatchResult, RecipeDetails, RecipeRequirement, SubstituteItem};
pub use utils::error::{PantryError, Result};
