use std::collections::HashMap;

use crate::error::DbError;

/// One row: a column-name-to-value mapping.
///
/// Values are untyped strings regardless of the declared column type.
/// The keys present in a record need not match the owning table's schema;
/// higher layers rely on presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    data: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the value for a column.
    pub fn set_value(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.data.insert(column.into(), value.into());
    }

    pub fn get_value(&self, column: &str) -> Result<&str, DbError> {
        self.data
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| DbError::ColumnNotFound(column.to_string()))
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.data.contains_key(column)
    }

    /// Full mapping, for bulk operations such as applying an update
    /// template onto a target record.
    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }

    pub(crate) fn remove_column(&mut self, column: &str) {
        self.data.remove(column);
    }
}
