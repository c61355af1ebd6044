//! Session-scoped in-memory cache of composite Pokemon details.
//!
//! Entries are keyed by Pokemon name and live as long as the last clone of the
//! cache. There is no eviction and no invalidation: a later fetch of the same
//! name simply replaces the earlier record.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::PokemonDetail;

/// Shared map from Pokemon name to [`PokemonDetail`].
///
/// Cloning is cheap and every clone sees the same entries. Writes come from
/// the [`DetailAggregator`](crate::aggregator::DetailAggregator) after both
/// payloads for a Pokemon were fetched; readers get owned copies.
///
/// Code outside the crate can only read:
///
/// ```compile_fail
/// use pokebox_sdk::models::PokemonDetail;
/// use pokebox_sdk::DetailCache;
///
/// let cache = DetailCache::new();
/// cache.insert(
///     "eevee",
///     PokemonDetail {
///         name: "eevee".into(),
///         image_url: None,
///         types: vec![],
///         description: None,
///     },
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct DetailCache {
    entries: Arc<RwLock<HashMap<String, PokemonDetail>>>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `detail` under `name`, returning the record it replaced.
    pub(crate) fn insert(
        &self,
        name: impl Into<String>,
        detail: PokemonDetail,
    ) -> Option<PokemonDetail> {
        self.entries.write().insert(name.into(), detail)
    }

    pub fn get(&self, name: &str) -> Option<PokemonDetail> {
        self.entries.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Cached names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }
}
