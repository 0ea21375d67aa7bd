use crate::core::matcher::{normalize, PantryMatcher};
use crate::core::{CatalogProvider, MatchResult, RecipeRequirement};
use crate::utils::error::Result;
use crate::utils::validation::validate_catalog;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct LoadedCatalog {
    generation: u64,
    entries: Arc<Vec<RecipeRequirement>>,
}

/// Match results for one catalog generation, evicted oldest-first once
/// `capacity` pantries are stored.
#[derive(Debug)]
struct ResultCache {
    generation: u64,
    capacity: usize,
    order: VecDeque<String>,
    entries: HashMap<String, Vec<MatchResult>>,
}

impl ResultCache {
    fn new(capacity: usize) -> Self {
        Self {
            generation: 0,
            capacity: capacity.max(1),
            order: VecDeque::new(),
            entries: HashMap::new(),
        }
    }

    fn get(&self, key: &str) -> Option<&Vec<MatchResult>> {
        self.entries.get(key)
    }

    /// 只接受目前世代的結果，重新載入前算出的結果直接丟棄
    fn insert(&mut self, generation: u64, key: String, matches: Vec<MatchResult>) -> bool {
        if generation != self.generation || self.entries.contains_key(&key) {
            return false;
        }
        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, matches);
        true
    }

    fn reset(&mut self, generation: u64) {
        self.generation = generation;
        self.order.clear();
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Loads the recipe catalog from a provider and answers suggestion queries
/// against it. The catalog is fetched lazily on first use and kept until
/// [`PantryEngine::reload`] is called.
///
/// Loads are serialized: a lazy load and an explicit reload never overlap,
/// so the catalog left in place is always the last one fetched.
pub struct PantryEngine<C: CatalogProvider> {
    provider: C,
    matcher: PantryMatcher,
    catalog: RwLock<Option<LoadedCatalog>>,
    // 載入鎖，內含目前的目錄世代
    loads: Mutex<u64>,
    cache: Option<Mutex<ResultCache>>,
}

impl<C: CatalogProvider> PantryEngine<C> {
    pub fn new(provider: C) -> Self {
        Self {
            provider,
            matcher: PantryMatcher::default(),
            catalog: RwLock::new(None),
            loads: Mutex::new(0),
            cache: None,
        }
    }

    pub fn with_matcher(mut self, matcher: PantryMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_cache(self, enabled: bool) -> Self {
        if enabled {
            self.with_cache_capacity(DEFAULT_CACHE_CAPACITY)
        } else {
            Self { cache: None, ..self }
        }
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = Some(Mutex::new(ResultCache::new(capacity)));
        self
    }

    /// Fetches the catalog again and drops every cached result.
    pub async fn reload(&self) -> Result<Arc<Vec<RecipeRequirement>>> {
        let mut generation = self.loads.lock().await;
        let loaded = self.load_locked(&mut generation).await?;
        Ok(loaded.entries)
    }

    pub async fn catalog(&self) -> Result<Arc<Vec<RecipeRequirement>>> {
        Ok(self.snapshot().await?.entries)
    }

    async fn snapshot(&self) -> Result<LoadedCatalog> {
        if let Some(loaded) = self.catalog.read().await.as_ref() {
            return Ok(loaded.clone());
        }

        let mut generation = self.loads.lock().await;
        // 等待鎖的期間可能已有其他呼叫完成載入
        if let Some(loaded) = self.catalog.read().await.as_ref() {
            return Ok(loaded.clone());
        }
        self.load_locked(&mut generation).await
    }

    async fn load_locked(&self, generation: &mut u64) -> Result<LoadedCatalog> {
        tracing::debug!("Fetching recipe catalog from {}", self.provider.describe());
        let entries = self.provider.fetch_all().await?;
        validate_catalog(&entries)?;
        tracing::info!("Loaded {} recipes from {}", entries.len(), self.provider.describe());

        *generation += 1;
        let loaded = LoadedCatalog {
            generation: *generation,
            entries: Arc::new(entries),
        };
        *self.catalog.write().await = Some(loaded.clone());

        if let Some(cache) = &self.cache {
            cache.lock().await.reset(loaded.generation);
        }

        Ok(loaded)
    }

    /// Recipes makeable from `pantry_items`, in catalog order.
    ///
    /// An empty pantry returns immediately without loading the catalog.
    pub async fn suggest<S: AsRef<str>>(&self, pantry_items: &[S]) -> Result<Vec<MatchResult>> {
        if pantry_items.is_empty() {
            tracing::debug!("Pantry is empty, skipping recipe matching");
            return Ok(Vec::new());
        }

        let key = cache_key(pantry_items);
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.lock().await.get(&key) {
                tracing::debug!("Cache hit for pantry [{}]", key);
                return Ok(hit.clone());
            }
        }

        let loaded = self.snapshot().await?;
        tracing::debug!(
            "Matching {} pantry items against {} recipes",
            pantry_items.len(),
            loaded.entries.len()
        );
        let matches = self.matcher.match_recipes(pantry_items, &loaded.entries);
        tracing::info!("Total matches found: {}", matches.len());

        if let Some(cache) = &self.cache {
            if !cache.lock().await.insert(loaded.generation, key, matches.clone()) {
                tracing::debug!("Catalog reloaded while matching, result not cached");
            }
        }

        Ok(matches)
    }
}

/// 正規化後排序，作為快取鍵
pub fn cache_key<S: AsRef<str>>(pantry_items: &[S]) -> String {
    pantry_items
        .iter()
        .map(|item| normalize(item.as_ref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join("|")
}
