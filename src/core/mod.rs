pub mod details;
pub mod engine;
pub mod filter;
pub mod matcher;
pub mod pantry;

pub use crate::domain::model::{
    CatalogDocument, DetailsDocument, MatchResult, RecipeDetails, RecipeRequirement, SubstituteItem,
};
pub use crate::domain::ports::{
    CatalogProvider, PantryStore, RecipeDetailsProvider, SubstituteProvider,
};
pub use crate::utils::error::Result;
