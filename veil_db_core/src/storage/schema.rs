use crate::storage::column::Column;
use crate::storage::constraint::Constraint;

/// Column and constraint definition of a table.
///
/// Columns keep insertion order (the order matters for serialization).
/// Neither column names nor constraints are deduplicated here.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: Vec<Column>,
    constraints: Vec<Constraint>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Case-sensitive exact-match lookup.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == name)
    }

    pub(crate) fn remove_column(&mut self, name: &str) {
        self.columns.retain(|c| c.name() != name);
    }

    pub(crate) fn retain_constraints(&mut self, keep: impl FnMut(&Constraint) -> bool) {
        self.constraints.retain(keep);
    }
}
