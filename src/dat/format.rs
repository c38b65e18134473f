//! Binary format constants and structures.

use crate::{Error, Result};

/// Header size in bytes.
pub const HEADER_SIZE: usize = 8;

/// Size of one index entry in bytes: prefix (u32) + record offset (u32) +
/// card type (u8).
pub const INDEX_ENTRY_SIZE: usize = 9;

/// Number of leading digits a lookup is keyed on.
pub const PREFIX_LEN: usize = 7;

/// Minimum accepted phone number length.
pub const MIN_PHONE_LEN: usize = 7;

/// Maximum accepted phone number length.
pub const MAX_PHONE_LEN: usize = 11;

/// Dataset file header (8 bytes).
///
/// ```text
/// +---------+----------------------------+
/// | 4 bytes | version tag (raw bytes)    |
/// | 4 bytes | first index offset (u32 LE)|
/// +---------+----------------------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatHeader {
    /// Raw version tag. Not interpreted by the lookup path.
    pub version: [u8; 4],
    /// Offset of the first index entry; also the end of the record region.
    pub first_index_offset: u32,
}

impl DatHeader {
    /// Parse the header from the start of a dataset buffer.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::InvalidHeaderSize {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }
        Ok(Self {
            version: [data[0], data[1], data[2], data[3]],
            first_index_offset: u32::from_le_bytes(data[4..8].try_into().unwrap()),
        })
    }

    /// Validate the index region bounds against the full buffer length.
    ///
    /// The index must start at or after the header, end at the buffer end,
    /// and hold a whole number of entries.
    pub fn validate(&self, len: usize) -> Result<()> {
        let offset = self.first_index_offset as usize;
        if offset < HEADER_SIZE || offset > len || (len - offset) % INDEX_ENTRY_SIZE != 0 {
            return Err(Error::InvalidIndexRegion {
                offset: self.first_index_offset,
                len,
            });
        }
        Ok(())
    }

    /// Number of index entries in a buffer of the given length.
    pub fn entry_count(&self, len: usize) -> u32 {
        ((len - self.first_index_offset as usize) / INDEX_ENTRY_SIZE) as u32
    }
}

/// Index entry (9 bytes): phone prefix, record offset, carrier code.
///
/// Entries are stored sorted ascending by `prefix`; the search relies on
/// that ordering and the loader does not re-verify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// First seven digits of the phone number, as a u32.
    pub prefix: u32,
    /// Byte offset of the record text, from the start of the dataset.
    pub record_offset: u32,
    /// Raw carrier code.
    pub card_type: u8,
}

impl IndexEntry {
    /// Decode an entry from its wire form. `data` must be exactly
    /// [`INDEX_ENTRY_SIZE`] bytes.
    pub fn parse(data: &[u8]) -> Self {
        Self {
            prefix: u32::from_le_bytes(data[0..4].try_into().unwrap()),
            record_offset: u32::from_le_bytes(data[4..8].try_into().unwrap()),
            card_type: data[8],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_parse() {
        let mut data = Vec::new();
        data.extend_from_slice(b"2404");
        data.extend_from_slice(&100u32.to_le_bytes());
        let header = DatHeader::parse(&data).unwrap();
        assert_eq!(&header.version, b"2404");
        assert_eq!(header.first_index_offset, 100);
    }

    #[test]
    fn test_header_parse_too_short() {
        let result = DatHeader::parse(&[0u8; 7]);
        assert!(matches!(
            result,
            Err(Error::InvalidHeaderSize {
                expected: HEADER_SIZE,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_header_validate_bounds() {
        let header = DatHeader {
            version: *b"2404",
            first_index_offset: 17,
        };
        // 17 + 2 entries
        assert!(header.validate(17 + 2 * INDEX_ENTRY_SIZE).is_ok());
        assert_eq!(header.entry_count(17 + 2 * INDEX_ENTRY_SIZE), 2);

        // Offset past the end of the buffer
        assert!(header.validate(16).is_err());

        // Index region not a multiple of the entry size
        assert!(header.validate(17 + INDEX_ENTRY_SIZE + 1).is_err());

        // Offset inside the header
        let bad = DatHeader {
            version: *b"2404",
            first_index_offset: 4,
        };
        assert!(bad.validate(40).is_err());
    }

    #[test]
    fn test_header_validate_empty_index() {
        let header = DatHeader {
            version: *b"2404",
            first_index_offset: 8,
        };
        assert!(header.validate(8).is_ok());
        assert_eq!(header.entry_count(8), 0);
    }

    #[test]
    fn test_index_entry_parse() {
        let mut data = Vec::new();
        data.extend_from_slice(&1362614u32.to_le_bytes());
        data.extend_from_slice(&8u32.to_le_bytes());
        data.push(3);
        let entry = IndexEntry::parse(&data);
        assert_eq!(entry.prefix, 1362614);
        assert_eq!(entry.record_offset, 8);
        assert_eq!(entry.card_type, 3);
    }
}
