use crate::core::{RecipeDetails, RecipeDetailsProvider};
use crate::utils::error::{PantryError, Result};
use std::fmt;

/// How a recipe page is addressed: by document id, or by its exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeKey {
    Id(String),
    Name(String),
}

impl RecipeKey {
    /// id 優先；兩者皆空白時回傳 None
    pub fn from_parts(id: Option<&str>, name: Option<&str>) -> Option<Self> {
        match (id.filter(|s| !s.is_empty()), name.filter(|s| !s.is_empty())) {
            (Some(id), _) => Some(RecipeKey::Id(id.to_string())),
            (None, Some(name)) => Some(RecipeKey::Name(name.to_string())),
            (None, None) => None,
        }
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeKey::Id(id) => write!(f, "id '{}'", id),
            RecipeKey::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// Fetches the page for `key`. An id lookup never falls back to the name.
pub async fn lookup_details<P: RecipeDetailsProvider + ?Sized>(
    provider: &P,
    key: &RecipeKey,
) -> Result<RecipeDetails> {
    tracing::debug!("Looking up recipe by {}", key);
    let found = match key {
        RecipeKey::Id(id) => provider.find_by_id(id).await?.map(|mut details| {
            if details.id.is_empty() {
                details.id = id.clone();
            }
            details
        }),
        RecipeKey::Name(name) => provider.find_by_name(name).await?,
    };

    found.ok_or_else(|| PantryError::RecipeNotFound {
        key: key.to_string(),
    })
}
