use crate::domain::ports::PantryStore;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// The items one user currently has, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pantry {
    #[serde(default)]
    items: Vec<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pantry = Self::new();
        for item in items {
            pantry.add(item);
        }
        pantry
    }

    /// Trims and stores `item`. Blank input and exact duplicates are ignored.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        let item = item.trim();
        if item.is_empty() || self.contains(item) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|existing| existing == item.trim()) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub async fn load<S: PantryStore>(store: &S) -> Result<Self> {
        let items = store.load().await?;
        Ok(Self::from_items(items))
    }

    pub async fn save<S: PantryStore>(&self, store: &S) -> Result<()> {
        store.save(&self.items).await
    }
}
