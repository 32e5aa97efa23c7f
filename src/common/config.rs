/// Default inventory data file name, used when no path is given on the
/// command line
pub const DEFAULT_INVENTORY_FILE: &str = "CDInventory.dat";

/// Magic bytes at the start of every inventory file
pub const INVENTORY_MAGIC: [u8; 4] = *b"CDIV";

/// Current on-disk format version
pub const FORMAT_VERSION: u16 = 1;

/// Size of the file header in bytes (magic + version + record count)
pub const FILE_HEADER_SIZE: usize = 10;

/// Maximum encoded length in bytes of a title or artist field, bounded by
/// the u16 length prefix
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

/// Smallest possible encoded record: id (4) + two empty length-prefixed
/// fields (2 + 2)
pub const MIN_RECORD_SIZE: usize = 8;
