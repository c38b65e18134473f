//! Dataset parser with memory-mapping support.

use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::format::*;
use crate::carrier::CardType;
use crate::record::{PhoneRecord, RecordFields};
use crate::{Error, Result};

/// Backing storage for a loaded dataset.
enum DatBuffer {
    /// Memory-mapped file.
    Mapped(Mmap),
    /// Fully owned in-memory copy.
    Owned(Vec<u8>),
}

impl DatBuffer {
    fn bytes(&self) -> &[u8] {
        match self {
            DatBuffer::Mapped(m) => m,
            DatBuffer::Owned(v) => v,
        }
    }
}

/// Phone dataset parser.
///
/// Owns an immutable dataset image and answers prefix lookups with O(log n)
/// binary search over the index region. The buffer is never mutated after
/// construction, so a `Parser` can be shared freely across threads.
pub struct Parser {
    buf: DatBuffer,
    first_index_offset: u32,
    entry_count: u32,
}

impl Parser {
    /// Memory-map a dataset file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_buffer(DatBuffer::Mapped(mmap))
    }

    /// Read an entire dataset from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_buffer(DatBuffer::Owned(data))
    }

    /// Load a dataset from an in-memory buffer.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_buffer(DatBuffer::Owned(data))
    }

    fn from_buffer(buf: DatBuffer) -> Result<Self> {
        let len = buf.bytes().len();
        let header = DatHeader::parse(buf.bytes())?;
        header.validate(len)?;
        Ok(Self {
            buf,
            first_index_offset: header.first_index_offset,
            entry_count: header.entry_count(len),
        })
    }

    /// Dataset version tag: the raw first 4 header bytes as text.
    pub fn version(&self) -> String {
        String::from_utf8_lossy(&self.bytes()[..4]).into_owned()
    }

    /// Number of entries in the index region.
    pub fn entry_count(&self) -> u32 {
        self.entry_count
    }

    /// Offset of the first index entry.
    pub fn first_index_offset(&self) -> u32 {
        self.first_index_offset
    }

    fn bytes(&self) -> &[u8] {
        self.buf.bytes()
    }

    /// Entry `i` of the index region. Bounds are guaranteed by the
    /// load-time region validation for `i < entry_count`.
    fn index_entry(&self, i: u32) -> IndexEntry {
        let start = self.first_index_offset as usize + i as usize * INDEX_ENTRY_SIZE;
        IndexEntry::parse(&self.bytes()[start..start + INDEX_ENTRY_SIZE])
    }

    /// Binary-search the index for a 7-digit prefix.
    ///
    /// Returns the record offset and raw carrier code on a hit, `None`
    /// when the search interval collapses without a match.
    pub fn find_offset(&self, prefix: u32) -> Option<(u32, u8)> {
        let mut left = 0u32;
        let mut right = self.entry_count;
        while left < right {
            let mid = left + (right - left) / 2;
            let entry = self.index_entry(mid);
            if entry.prefix > prefix {
                right = mid;
            } else if entry.prefix < prefix {
                left = mid + 1;
            } else {
                return Some((entry.record_offset, entry.card_type));
            }
        }
        None
    }

    /// Decode the NUL-terminated, pipe-delimited record at `offset`.
    pub(crate) fn decode_record(&self, offset: u32) -> Result<RecordFields> {
        let data = self.bytes();
        let start = offset as usize;
        if start >= data.len() {
            return Err(Error::CorruptRecord {
                offset,
                reason: "record offset out of bounds",
            });
        }
        let end = data[start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or(Error::CorruptRecord {
                offset,
                reason: "missing NUL terminator",
            })?;
        let mut fields = data[start..start + end].split(|&b| b == b'|');
        let mut next_field = || {
            fields
                .next()
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .ok_or(Error::CorruptRecord {
                    offset,
                    reason: "fewer than 4 fields",
                })
        };
        Ok(RecordFields {
            province: next_field()?,
            city: next_field()?,
            zip_code: next_field()?,
            area_zone: next_field()?,
        })
    }

    /// Look up the full record for a phone number.
    ///
    /// The phone number must be 7 to 11 characters long and start with
    /// seven digits; it is carried into the result unmodified.
    pub fn find(&self, phone: &str) -> Result<PhoneRecord> {
        let prefix = parse_prefix(phone)?;
        let (record_offset, card_type) = self
            .find_offset(prefix)
            .ok_or_else(|| Error::NotFound(phone.to_string()))?;
        let fields = self.decode_record(record_offset)?;
        Ok(fields.into_record(phone, CardType::from_u8(card_type)))
    }
}

/// Validate a phone number string and extract its numeric 7-digit prefix.
///
/// Runs before any dataset access.
pub(crate) fn parse_prefix(phone: &str) -> Result<u32> {
    if phone.len() < MIN_PHONE_LEN || phone.len() > MAX_PHONE_LEN {
        return Err(Error::InvalidPhoneLength(phone.len()));
    }
    phone
        .get(..PREFIX_LEN)
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| Error::InvalidPrefix(phone.to_string()))
}
