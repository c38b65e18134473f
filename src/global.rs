//! Global parser state and crate-level lookup API.
//!
//! Embedding applications that treat the dataset as process-wide state can
//! install it once with [`load_dataset`] and call [`find`] from anywhere.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::io::Read;
use std::path::Path;

use crate::dat::Parser;
use crate::error::{Error, Result};
use crate::record::PhoneRecord;

/// Global dataset parser
static GLOBAL_PARSER: Lazy<RwLock<Option<Parser>>> = Lazy::new(|| RwLock::new(None));

/// Install the global dataset from a file path.
///
/// Replaces any previously loaded dataset.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<()> {
    let parser = Parser::open(path.as_ref())?;
    let mut guard = GLOBAL_PARSER.write();
    *guard = Some(parser);

    log::debug!("Loaded phone dataset from {:?}", path.as_ref());

    Ok(())
}

/// Install the global dataset from a reader.
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<()> {
    let parser = Parser::from_reader(reader)?;
    let mut guard = GLOBAL_PARSER.write();
    *guard = Some(parser);

    log::debug!("Loaded phone dataset from reader");

    Ok(())
}

/// Check whether a global dataset has been loaded.
pub fn is_loaded() -> bool {
    GLOBAL_PARSER.read().is_some()
}

/// Version tag of the loaded global dataset, if any.
pub fn dataset_version() -> Option<String> {
    GLOBAL_PARSER.read().as_ref().map(|p| p.version())
}

/// Look up a phone number against the global dataset.
///
/// Fails with [`Error::NotLoaded`] until a dataset has been installed;
/// there is no built-in dataset to fall back to.
///
/// # Examples
/// ```ignore
/// phonedat::load_dataset("phone.dat")?;
///
/// let record = phonedat::find("13626143333")?;
/// println!("{}", record);
/// ```
pub fn find(phone: &str) -> Result<PhoneRecord> {
    let guard = GLOBAL_PARSER.read();
    match guard.as_ref() {
        Some(parser) => parser.find(phone),
        None => Err(Error::NotLoaded),
    }
}
