//! phonedat - offline carrier and region lookup for Chinese phone numbers.
//!
//! Resolves the first seven digits of a phone number against a pre-built
//! binary dataset and returns the owning carrier together with province,
//! city, postal code, and long-distance area code.
//!
//! # Features
//!
//! - **Binary-search lookups**: O(log n) over a fixed-width sorted index
//! - **Memory-mapped or in-memory datasets**: load from a path, a reader,
//!   or a byte buffer
//! - **Thread-safe**: a loaded dataset is immutable and freely shareable
//! - **Cached lookups with hot reload**: LRU result cache and atomic
//!   dataset replacement without interrupting readers
//!
//! # Quick Start
//!
//! ```ignore
//! use phonedat::Parser;
//!
//! let parser = Parser::open("phone.dat")?;
//! let record = parser.find("13626143333")?;
//! println!("{}", record);
//! ```
//!
//! For high query volumes over a long-lived dataset, use [`CachedParser`]:
//!
//! ```ignore
//! use phonedat::CachedParser;
//!
//! let parser = CachedParser::open("phone.dat")?;
//! let record = parser.find("13626143333")?;
//!
//! // Swap in a refreshed dataset without downtime
//! parser.reload("phone_new.dat")?;
//! ```
//!
//! Applications that want a single process-wide dataset can use the
//! crate-level functions instead:
//!
//! ```ignore
//! phonedat::load_dataset("phone.dat")?;
//! let record = phonedat::find("13626143333")?;
//! ```

mod carrier;
mod error;
mod global;
mod record;

pub mod dat;

// Re-export core types
pub use carrier::{CardType, UNKNOWN_OPERATOR};
pub use error::{Error, Result};
pub use record::PhoneRecord;

// Re-export parser types
pub use dat::{CacheStats, CachedParser, CachedParserConfig, Parser};

// Re-export global API functions
pub use global::{dataset_version, find, is_loaded, load_dataset, load_dataset_from_reader};
