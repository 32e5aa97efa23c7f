use std::fmt;

use bytes::{Buf, BufMut};

use crate::common::{CdInvError, Result, MAX_FIELD_LEN};

/// A single CD entry in the inventory.
///
/// A record has a fixed shape: an integer ID used as the delete key plus two
/// free-form text fields. IDs are not required to be unique; the inventory
/// keeps whatever the user enters and delete resolves duplicates by taking
/// the first match.
///
/// ## Record Binary Format
///
/// ```text
/// +----------+-----------------+--------+------------------+---------+
/// | id (u32) | title_len (u16) | title  | artist_len (u16) | artist  |
/// +----------+-----------------+--------+------------------+---------+
/// ```
///
/// All integers are little-endian. Title and artist are UTF-8 with a u16
/// byte-length prefix, so a single field can hold at most `MAX_FIELD_LEN`
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier used as the lookup/delete key (not necessarily unique)
    pub id: u32,

    /// Album title
    pub title: String,

    /// Artist name
    pub artist: String,
}

impl Record {
    /// Creates a new record from the given fields.
    pub fn new(id: u32, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Returns the number of bytes `encode` writes for this record.
    pub fn encoded_len(&self) -> usize {
        4 + 2 + self.title.len() + 2 + self.artist.len()
    }

    /// Appends the binary encoding of this record to `buf`.
    ///
    /// Field lengths are validated before anything is written, so `buf` is
    /// untouched on failure.
    pub fn encode<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        check_field("title", &self.title)?;
        check_field("artist", &self.artist)?;

        buf.put_u32_le(self.id);
        put_field(buf, &self.title);
        put_field(buf, &self.artist);
        Ok(())
    }

    /// Consumes one record from the front of `buf`.
    ///
    /// Truncated data and non-UTF-8 field contents surface as `Corrupt`
    /// errors; malformed input never panics.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self> {
        if buf.remaining() < 4 {
            return Err(CdInvError::Corrupt("truncated record id".to_string()));
        }
        let id = buf.get_u32_le();
        let title = get_field(buf, "title")?;
        let artist = get_field(buf, "artist")?;

        Ok(Self { id, title, artist })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by: {})", self.id, self.title, self.artist)
    }
}

/// Rejects fields longer than the u16 length prefix can describe.
fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.len() > MAX_FIELD_LEN {
        return Err(CdInvError::FieldTooLong {
            field,
            len: value.len(),
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

fn put_field<B: BufMut>(buf: &mut B, value: &str) {
    let bytes = value.as_bytes();
    buf.put_u16_le(bytes.len() as u16);
    buf.put_slice(bytes);
}

fn get_field<B: Buf>(buf: &mut B, field: &'static str) -> Result<String> {
    if buf.remaining() < 2 {
        return Err(CdInvError::Corrupt(format!("truncated {} length", field)));
    }
    let len = buf.get_u16_le() as usize;
    if buf.remaining() < len {
        return Err(CdInvError::Corrupt(format!("truncated {} data", field)));
    }
    let raw = buf.copy_to_bytes(len);
    String::from_utf8(raw.to_vec())
        .map_err(|_| CdInvError::Corrupt(format!("{} is not valid UTF-8", field)))
}
