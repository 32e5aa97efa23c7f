mod inventory;
mod record;

pub use inventory::Inventory;
pub use record::Record;
