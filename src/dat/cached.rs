//! Cached dataset parser with hot reload support.
//!
//! This module provides a lookup front end with:
//! - LRU cache for decoded results, keyed by numeric prefix
//! - Atomic hot reload support for swapping in a refreshed dataset
//! - Thread-safe concurrent access

use arc_swap::ArcSwap;
use quick_cache::sync::Cache;
use std::path::Path;
use std::sync::Arc;

use super::reader::{parse_prefix, Parser};
use crate::carrier::CardType;
use crate::record::{PhoneRecord, RecordFields};
use crate::{Error, Result};

/// Default cache capacity (number of prefixes).
const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Configuration for the cached parser.
#[derive(Debug, Clone)]
pub struct CachedParserConfig {
    /// Maximum number of prefixes held in the cache.
    pub cache_capacity: usize,
    /// Whether to enable caching.
    pub cache_enabled: bool,
}

impl Default for CachedParserConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_enabled: true,
        }
    }
}

impl CachedParserConfig {
    /// Create a new configuration with the specified cache capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache_capacity: capacity,
            cache_enabled: true,
        }
    }

    /// Create a configuration with caching disabled.
    pub fn no_cache() -> Self {
        Self {
            cache_capacity: 0,
            cache_enabled: false,
        }
    }
}

/// Cached phone dataset parser with hot reload support.
///
/// Wraps [`Parser`] and adds:
/// - an LRU cache of decoded lookups, so repeated queries for the same
///   prefix block skip the search and decode entirely (misses are cached
///   too)
/// - atomic hot reload for picking up a refreshed dataset without
///   interrupting concurrent readers
///
/// # Example
///
/// ```ignore
/// use phonedat::CachedParser;
/// use std::path::Path;
///
/// let parser = CachedParser::open(Path::new("phone.dat"))?;
///
/// // Query with caching
/// let record = parser.find("13626143333")?;
///
/// // Hot reload a new dataset
/// parser.reload(Path::new("phone_new.dat"))?;
/// ```
pub struct CachedParser {
    /// The underlying parser, wrapped in ArcSwap for atomic replacement.
    inner: ArcSwap<Parser>,
    /// LRU cache of decoded lookups; `None` caches misses as well.
    cache: Option<Cache<u32, Option<(RecordFields, CardType)>>>,
    /// Configuration.
    config: CachedParserConfig,
    /// Generation counter, incremented on each reload.
    generation: std::sync::atomic::AtomicU64,
}

impl CachedParser {
    /// Memory-map a dataset file with default configuration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, CachedParserConfig::default())
    }

    /// Memory-map a dataset file with custom configuration.
    pub fn open_with_config(path: impl AsRef<Path>, config: CachedParserConfig) -> Result<Self> {
        Self::with_parser(Parser::open(path)?, config)
    }

    /// Load a dataset from bytes with default configuration.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_bytes_with_config(data, CachedParserConfig::default())
    }

    /// Load a dataset from bytes with custom configuration.
    pub fn from_bytes_with_config(data: Vec<u8>, config: CachedParserConfig) -> Result<Self> {
        Self::with_parser(Parser::from_bytes(data)?, config)
    }

    fn with_parser(parser: Parser, config: CachedParserConfig) -> Result<Self> {
        let cache = if config.cache_enabled && config.cache_capacity > 0 {
            Some(Cache::new(config.cache_capacity))
        } else {
            None
        };

        Ok(Self {
            inner: ArcSwap::from_pointee(parser),
            cache,
            config,
            generation: std::sync::atomic::AtomicU64::new(0),
        })
    }

    /// Hot reload the dataset from a new file.
    ///
    /// Atomically replaces the underlying parser and clears the cache.
    /// In-flight queries complete against the old dataset, new queries
    /// see the new one.
    pub fn reload(&self, path: impl AsRef<Path>) -> Result<()> {
        let parser = Parser::open(path.as_ref())?;
        self.install(parser);
        log::info!("Hot reloaded phone dataset from {:?}", path.as_ref());
        Ok(())
    }

    /// Hot reload the dataset from bytes.
    pub fn reload_from_bytes(&self, data: Vec<u8>) -> Result<()> {
        let parser = Parser::from_bytes(data)?;
        self.install(parser);
        log::info!("Hot reloaded phone dataset from bytes");
        Ok(())
    }

    fn install(&self, parser: Parser) {
        self.inner.store(Arc::new(parser));

        // Stale decoded results must not survive the swap
        self.generation
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if let Some(ref cache) = self.cache {
            cache.clear();
        }
    }

    /// Look up a phone number with caching.
    ///
    /// Semantics are identical to [`Parser::find`]; input validation runs
    /// before the cache is consulted.
    pub fn find(&self, phone: &str) -> Result<PhoneRecord> {
        let prefix = parse_prefix(phone)?;

        // Check cache first
        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.get(&prefix) {
                return match cached {
                    Some((fields, card_type)) => Ok(fields.into_record(phone, card_type)),
                    None => Err(Error::NotFound(phone.to_string())),
                };
            }
        }

        // Cache miss - perform the lookup
        let parser = self.inner.load();
        let result = match parser.find_offset(prefix) {
            Some((record_offset, card_type)) => Some((
                parser.decode_record(record_offset)?,
                CardType::from_u8(card_type),
            )),
            None => None,
        };

        // Store in cache (hits and misses alike)
        if let Some(ref cache) = self.cache {
            cache.insert(prefix, result.clone());
        }

        match result {
            Some((fields, card_type)) => Ok(fields.into_record(phone, card_type)),
            None => Err(Error::NotFound(phone.to_string())),
        }
    }

    /// Version tag of the currently loaded dataset.
    pub fn version(&self) -> String {
        self.inner.load().version()
    }

    /// Clear the cache.
    pub fn clear_cache(&self) {
        if let Some(ref cache) = self.cache {
            cache.clear();
        }
    }

    /// Get cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        if let Some(ref cache) = self.cache {
            CacheStats {
                capacity: self.config.cache_capacity,
                len: cache.len(),
                enabled: true,
            }
        } else {
            CacheStats {
                capacity: 0,
                len: 0,
                enabled: false,
            }
        }
    }

    /// Get the current generation (incremented on each reload).
    pub fn generation(&self) -> u64 {
        self.generation.load(std::sync::atomic::Ordering::SeqCst)
    }

    /// Get a reference to the underlying parser.
    ///
    /// Note: this is primarily for inspection/debugging. The returned
    /// Arc may become stale after a hot reload.
    pub fn inner(&self) -> arc_swap::Guard<Arc<Parser>> {
        self.inner.load()
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    /// Maximum cache capacity.
    pub capacity: usize,
    /// Current number of entries in the cache.
    pub len: usize,
    /// Whether caching is enabled.
    pub enabled: bool,
}
