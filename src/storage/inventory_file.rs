use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytes::{Buf, BufMut};
use tracing::debug;

use crate::common::{
    CdInvError, Result, FILE_HEADER_SIZE, FORMAT_VERSION, INVENTORY_MAGIC, MIN_RECORD_SIZE,
};
use crate::inventory::{Inventory, Record};

/// Storage adapter binding an inventory to a data file on disk.
///
/// Reads and writes are whole-file: [`load`](Self::load) builds a fresh
/// inventory from the file contents and [`save`](Self::save) rewrites the
/// file from scratch. Nothing is held open between operations.
///
/// ## File Binary Format
///
/// ```text
/// +------------+---------------+-------------------+--------------+
/// | magic (4B) | version (u16) | num_records (u32) | records ...  |
/// +------------+---------------+-------------------+--------------+
/// ```
///
/// The magic bytes are `CDIV` and integers are little-endian. Records are
/// concatenated with no padding in inventory order; see [`Record`] for the
/// per-record layout.
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    /// Creates an adapter for the given data file path.
    ///
    /// The path is not opened or created here; it is touched only when a
    /// load or save actually runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the data file path this adapter reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole data file and decodes it into an inventory.
    ///
    /// A missing file is reported as `FileNotFound` so callers can treat it
    /// as a fresh start. Any structural problem, a wrong magic, an unknown
    /// version, truncated or trailing bytes, surfaces as an error without
    /// panicking.
    pub fn load(&self) -> Result<Inventory> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CdInvError::FileNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        let mut buf = &raw[..];

        if buf.remaining() < FILE_HEADER_SIZE {
            return Err(CdInvError::Corrupt("file shorter than header".to_string()));
        }
        let mut magic = [0u8; 4];
        buf.copy_to_slice(&mut magic);
        if magic != INVENTORY_MAGIC {
            return Err(CdInvError::BadMagic);
        }
        let version = buf.get_u16_le();
        if version != FORMAT_VERSION {
            return Err(CdInvError::UnsupportedVersion(version));
        }
        let num_records = buf.get_u32_le() as usize;

        // Bound check before allocating: every record takes at least
        // MIN_RECORD_SIZE bytes.
        if buf.remaining() < num_records.saturating_mul(MIN_RECORD_SIZE) {
            return Err(CdInvError::Corrupt(format!(
                "header claims {} records but only {} bytes follow",
                num_records,
                buf.remaining()
            )));
        }

        let mut records = Vec::with_capacity(num_records);
        for _ in 0..num_records {
            records.push(Record::decode(&mut buf)?);
        }
        if buf.has_remaining() {
            return Err(CdInvError::Corrupt(format!(
                "{} trailing bytes after the last record",
                buf.remaining()
            )));
        }

        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(Inventory::from_records(records))
    }

    /// Encodes the inventory and replaces the data file with it.
    ///
    /// The bytes go to a sibling temp file which is synced and then renamed
    /// over the target, so a failure partway through cannot clobber an
    /// existing file.
    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let body_len: usize = inventory.records().iter().map(Record::encoded_len).sum();
        let mut buf = Vec::with_capacity(FILE_HEADER_SIZE + body_len);

        buf.put_slice(&INVENTORY_MAGIC);
        buf.put_u16_le(FORMAT_VERSION);
        buf.put_u32_le(inventory.len() as u32);
        for record in inventory.records() {
            record.encode(&mut buf)?;
        }

        let tmp_path = self.tmp_path();
        let mut file = File::create(&tmp_path)?;
        file.write_all(&buf)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp_path, &self.path)?;

        debug!(
            "saved {} records to {}",
            inventory.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Sibling path the save staging file is written to before the rename.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}
