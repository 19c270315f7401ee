//! Time-boxed caching of loaded datasets
//!
//! Loading the raw files costs a full read and parse, so repeated queries go
//! through a `DatasetCache`. Each dataset kind has its own `TimedCache`: an
//! LRU of `{ data, loaded_at }` entries that are served until they are older
//! than the TTL, then reloaded. Failed loads are never stored.

use lru::LruCache;
use std::{
    hash::Hash,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};
use tracing::{debug, info};

use super::files::{read_json_array, DataPaths};
use crate::{
    stats::{BatterSeasonRecord, PitcherSeasonRecord, TeamSeason},
    Result,
};


/// How long a loaded dataset is served before it is read again.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry<V> {
    data: V,
    loaded_at: Instant,
}

/// LRU cache whose entries expire `ttl` after they were loaded.
pub struct TimedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    entries: Mutex<LruCache<K, CacheEntry<V>>>,
    ttl: Duration,
}

impl<K, V> TimedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, CacheEntry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached value while fresh, otherwise run `load` and store it.
    pub fn get_or_load<F>(&self, key: &K, load: F) -> Result<V>
    where
        F: FnOnce() -> Result<V>,
    {
        if let Some(entry) = self.lock().get(key) {
            if entry.loaded_at.elapsed() < self.ttl {
                return Ok(entry.data.clone());
            }
        }

        let data = load()?;
        self.lock().put(
            key.clone(),
            CacheEntry {
                data: data.clone(),
                loaded_at: Instant::now(),
            },
        );
        Ok(data)
    }

    /// Whether `key` would be served without reloading.
    pub fn is_fresh(&self, key: &K) -> bool {
        self.lock()
            .peek(key)
            .is_some_and(|entry| entry.loaded_at.elapsed() < self.ttl)
    }

    pub fn invalidate(&self, key: &K) {
        self.lock().pop(key);
    }

    pub fn invalidate_all(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Cached access to the derived team-seasons and both raw datasets.
///
/// Construct one per process and pass it to whatever needs the data.
pub struct DatasetCache {
    paths: DataPaths,
    team_seasons: TimedCache<PathBuf, Arc<Vec<TeamSeason>>>,
    batters: TimedCache<PathBuf, Arc<Vec<BatterSeasonRecord>>>,
    pitchers: TimedCache<PathBuf, Arc<Vec<PitcherSeasonRecord>>>,
}

impl DatasetCache {
    pub fn new(paths: DataPaths) -> Self {
        Self::with_ttl(paths, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(paths: DataPaths, ttl: Duration) -> Self {
        Self {
            paths,
            team_seasons: TimedCache::new(4, ttl),
            batters: TimedCache::new(4, ttl),
            pitchers: TimedCache::new(4, ttl),
        }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Derived team-season records (`team-season.json`).
    pub fn team_seasons(&self) -> Result<Arc<Vec<TeamSeason>>> {
        load_cached(&self.team_seasons, &self.paths.team_seasons)
    }

    /// Raw batter rows.
    pub fn batters(&self) -> Result<Arc<Vec<BatterSeasonRecord>>> {
        load_cached(&self.batters, &self.paths.batting)
    }

    /// Raw pitcher rows.
    pub fn pitchers(&self) -> Result<Arc<Vec<PitcherSeasonRecord>>> {
        load_cached(&self.pitchers, &self.paths.pitching)
    }

    /// Drop every cached dataset; the next access reads from disk.
    pub fn invalidate(&self) {
        self.team_seasons.invalidate_all();
        self.batters.invalidate_all();
        self.pitchers.invalidate_all();
        debug!("dataset cache invalidated");
    }
}

fn load_cached<T>(cache: &TimedCache<PathBuf, Arc<Vec<T>>>, path: &Path) -> Result<Arc<Vec<T>>>
where
    T: serde::de::DeserializeOwned,
{
    cache.get_or_load(&path.to_path_buf(), || {
        let rows: Vec<T> = read_json_array(path)?;
        info!(path = %path.display(), rows = rows.len(), "loaded dataset");
        Ok(Arc::new(rows))
    })
}
