//! Pantry-to-recipe matching.
//!
//! A recipe is suggested when every one of its required ingredients is
//! covered by some pantry entry. Coverage is bidirectional substring
//! containment between the normalized pantry entry and the requirement as
//! authored in the catalog, so "garlic cloves" covers "garlic" and "egg"
//! covers "eggplant".

use crate::domain::model::{MatchResult, RecipeRequirement};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

// ASCII 空白（\s 的定義），不含 NBSP 等 Unicode 空白
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("whitespace pattern is valid"));

/// How a pantry entry is compared against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Either string contains the other. Requirements are not normalized.
    #[default]
    Substring,
    /// The normalized requirement must equal a pantry entry.
    Exact,
}

/// Lowercases, trims and collapses whitespace runs into a single space.
///
/// Trimming strips every character up to U+0020 (control characters
/// included); collapsing only touches ASCII whitespace, so a non-breaking
/// space stays as it is.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim_matches(|c: char| c <= '\u{20}');
    WHITESPACE_RUN.replace_all(trimmed, " ").into_owned()
}

/// [`normalize`] for values that may be absent; `None` becomes `""`.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

pub fn normalized_pantry<S: AsRef<str>>(pantry_items: &[S]) -> HashSet<String> {
    pantry_items.iter().map(|item| normalize(item.as_ref())).collect()
}

pub fn is_satisfied<S: AsRef<str>>(pantry_set: &HashSet<String>, required_ingredients: &[S]) -> bool {
    is_satisfied_with(MatchMode::Substring, pantry_set, required_ingredients)
}

pub fn is_satisfied_with<S: AsRef<str>>(
    mode: MatchMode,
    pantry_set: &HashSet<String>,
    required_ingredients: &[S],
) -> bool {
    required_ingredients.iter().all(|required| {
        let required = required.as_ref();
        match mode {
            MatchMode::Substring => pantry_set
                .iter()
                .any(|entry| entry.contains(required) || required.contains(entry.as_str())),
            MatchMode::Exact => pantry_set.contains(&normalize(required)),
        }
    })
}

/// Returns the recipes makeable from `pantry_items`, in catalog order.
pub fn match_recipes<S: AsRef<str>>(
    pantry_items: &[S],
    catalog: &[RecipeRequirement],
) -> Vec<MatchResult> {
    PantryMatcher::default().match_recipes(pantry_items, catalog)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PantryMatcher {
    mode: MatchMode,
}

impl PantryMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(MatchMode::Exact)
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn match_recipes<S: AsRef<str>>(
        &self,
        pantry_items: &[S],
        catalog: &[RecipeRequirement],
    ) -> Vec<MatchResult> {
        if pantry_items.is_empty() {
            return Vec::new();
        }

        let pantry_set = normalized_pantry(pantry_items);

        catalog
            .iter()
            .filter(|entry| is_satisfied_with(self.mode, &pantry_set, &entry.required_ingredients))
            .map(MatchResult::from)
            .collect()
    }
}
