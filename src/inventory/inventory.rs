use super::Record;

/// The ordered in-memory collection of records for the current session.
///
/// Insertion order is display order and storage order. The inventory lives
/// entirely in memory; reading and writing the data file is the
/// [`InventoryFile`] adapter's job and nothing here touches the disk.
///
/// [`InventoryFile`]: crate::storage::InventoryFile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<Record>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory from an already-ordered list of records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Appends a record to the end of the inventory.
    ///
    /// No uniqueness check is performed; duplicate IDs are legal and stay
    /// in insertion order.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the first record whose ID equals `id`, scanning from the
    /// start, and returns it.
    ///
    /// Returns `None` and leaves the inventory unchanged when no record
    /// matches. With duplicate IDs only the first match is removed.
    pub fn delete(&mut self, id: u32) -> Option<Record> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Returns the records in storage order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the inventory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inventory {
        Inventory::from_records(vec![
            Record::new(1, "Thriller", "Michael Jackson"),
            Record::new(2, "Back in Black", "AC/DC"),
            Record::new(3, "Rumours", "Fleetwood Mac"),
        ])
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut inventory = sample();
        inventory.add(Record::new(9, "Abbey Road", "The Beatles"));

        assert_eq!(inventory.len(), 4);
        assert_eq!(
            inventory.records().last(),
            Some(&Record::new(9, "Abbey Road", "The Beatles"))
        );
    }

    #[test]
    fn test_delete_removes_first_match() {
        let mut inventory = sample();
        let removed = inventory.delete(2);

        assert_eq!(removed, Some(Record::new(2, "Back in Black", "AC/DC")));
        assert_eq!(inventory.len(), 2);
        assert!(inventory.records().iter().all(|record| record.id != 2));
    }

    #[test]
    fn test_delete_missing_id_is_a_no_op() {
        let mut inventory = sample();
        let before = inventory.clone();

        assert_eq!(inventory.delete(42), None);
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_delete_duplicate_ids_removes_first_only() {
        let mut inventory = Inventory::new();
        inventory.add(Record::new(1, "A", "X"));
        inventory.add(Record::new(1, "B", "Y"));

        let removed = inventory.delete(1).unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(inventory.records(), [Record::new(1, "B", "Y")]);
    }

    #[test]
    fn test_clear_empties_the_inventory() {
        let mut inventory = sample();
        inventory.clear();
        assert!(inventory.is_empty());
    }
}
