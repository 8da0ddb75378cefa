use std::cell::RefCell;

use serde_json::{Map, Value};

/// One stored record: column name to value.
pub type Row = Map<String, Value>;

/// An in-memory table of rows.
///
/// Stands in for a database connection. It knows nothing about users; it
/// stores and returns rows in insertion order.
///
/// # Example
///
/// ```
/// use gateway_patterns::repository::{MockDatabase, Row};
/// use serde_json::json;
///
/// let db = MockDatabase::new();
///
/// let mut row = Row::new();
/// row.insert("id".to_string(), json!(1));
/// db.insert_row(row);
///
/// assert_eq!(db.select_all().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockDatabase {
    rows: RefCell<Vec<Row>>,
}

impl MockDatabase {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn insert_row(&self, row: Row) {
        self.rows.borrow_mut().push(row);
    }

    /// Returns a snapshot of every row, oldest first.
    pub fn select_all(&self) -> Vec<Row> {
        self.rows.borrow().clone()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    /// Returns true if no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}
