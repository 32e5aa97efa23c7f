mod inventory_file;

pub use inventory_file::InventoryFile;
