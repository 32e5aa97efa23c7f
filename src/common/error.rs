use std::path::PathBuf;

use thiserror::Error;

/// Inventory error types
#[derive(Error, Debug)]
pub enum CdInvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inventory file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Not an inventory file (bad magic bytes)")]
    BadMagic,

    #[error("Unsupported inventory format version {0}")]
    UnsupportedVersion(u16),

    #[error("Corrupt inventory file: {0}")]
    Corrupt(String),

    #[error("Record field {field} is {len} bytes, exceeding the maximum of {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, CdInvError>;
