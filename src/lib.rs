//! CdInv - A command-line CD inventory manager in Rust
//!
//! This crate provides the core components for a small single-user CD
//! inventory: an in-memory record collection, a binary file format for
//! persisting it, and an interactive menu shell that drives both.
//!
//! # Architecture
//!
//! The system is organized into three layers, leaves first:
//!
//! - **Inventory** (`inventory`): The in-memory data model
//!   - `Record`: One CD entry with ID, title and artist
//!   - `Inventory`: The ordered collection of records for the session
//!
//! - **Storage** (`storage`): Whole-file persistence
//!   - `InventoryFile`: Loads and saves an inventory at a fixed path using
//!     a little-endian binary format with a magic/version header
//!
//! - **Shell** (`shell`): Interactive presentation glue
//!   - `MenuCommand`: The six single-letter menu operations
//!   - `Session`: The menu loop over generic input/output streams
//!
//! # Example
//!
//! ```rust,no_run
//! use cdinv::inventory::{Inventory, Record};
//! use cdinv::storage::InventoryFile;
//!
//! let file = InventoryFile::new("CDInventory.dat");
//!
//! // Build an inventory in memory
//! let mut inventory = Inventory::new();
//! inventory.add(Record::new(7, "Rumours", "Fleetwood Mac"));
//!
//! // Persist it and read it back
//! file.save(&inventory).unwrap();
//! let loaded = file.load().unwrap();
//! assert_eq!(loaded, inventory);
//! ```

pub mod common;
pub mod inventory;
pub mod shell;
pub mod storage;

// Re-export commonly used types at the crate root
pub use common::{CdInvError, Result};
pub use inventory::{Inventory, Record};
pub use storage::InventoryFile;
