//! Memoized route results.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::model::{PathResult, RouteMode};

/// Key identifying a cached route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub from: String,
    pub to: String,
    pub mode: RouteMode,
}

impl CacheKey {
    pub fn new(from: impl Into<String>, to: impl Into<String>, mode: RouteMode) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            mode,
        }
    }

    /// Key derived from the first and last step of a result.
    ///
    /// Empty results have no endpoints and therefore no key.
    pub fn for_result(result: &PathResult) -> Option<Self> {
        Some(Self::new(result.origin()?, result.destination()?, result.mode))
    }
}

/// First-write-wins store of computed routes.
///
/// Saves for distinct keys proceed concurrently; racing saves for the same
/// key settle on whichever insert lands first and the rest are dropped
/// silently.
#[derive(Debug, Default)]
pub struct PathCache {
    entries: DashMap<CacheKey, PathResult>,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `result` unless its key is already present.
    ///
    /// The stored copy is marked `cached = true`. Returns `true` when the
    /// result was inserted.
    pub fn save(&self, result: &PathResult) -> bool {
        let Some(key) = CacheKey::for_result(result) else {
            return false;
        };

        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let mut stored = result.clone();
                stored.cached = true;
                slot.insert(stored);
                true
            }
        }
    }

    /// Exact-match lookup.
    pub fn lookup(&self, from: &str, to: &str, mode: RouteMode) -> Option<PathResult> {
        self.entries
            .get(&CacheKey::new(from, to, mode))
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry; used when the graph they were computed on is replaced.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
