//! Dataset access for the pipeline and its consumers
//!
//! - `files`: data layout on disk, JSON reads and atomic writes
//! - `cache`: time-boxed in-memory cache of loaded datasets
//! - `queries`: lookups over the derived team-season records
//! - `players`: lookups over raw batter/pitcher rows
//! - `trajectory`: per-team metric series across years

pub mod cache;
pub mod files;
pub mod players;
pub mod queries;
pub mod trajectory;

pub use cache::{DatasetCache, TimedCache, DEFAULT_CACHE_TTL};
pub use files::{read_json_array, write_json_atomic, DataPaths};
