use std::collections::HashMap;

use tracing::warn;

use crate::error::DbError;
use crate::storage::constraint::Constraint;
use crate::storage::record::Record;
use crate::storage::table::{split_condition, strip_apostrophes, Table};

/// Top-level owner of all tables.
///
/// An explicitly constructed value: whoever owns the command loop owns
/// the catalog. Tables never reference each other directly; foreign keys
/// are data inside a schema, resolved by name through the catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    tables: HashMap<String, Table>,
}

/// Materialized select result: projected column names plus one row of
/// values per matching record, positionally aligned to `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Inserts or overwrites the catalog entry for `name`.
    pub fn add_table(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }

    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn table(&self, name: &str) -> Result<&Table, DbError> {
        self.tables
            .get(name)
            .ok_or_else(|| DbError::TableNotFound(name.to_string()))
    }

    pub fn table_mut(&mut self, name: &str) -> Result<&mut Table, DbError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| DbError::TableNotFound(name.to_string()))
    }

    /// Drops a table and strips, from every remaining table's schema, any
    /// foreign key that references it. The edit happens through the
    /// catalog's own exclusive access to the tables.
    pub fn drop_table(&mut self, name: &str) -> Result<(), DbError> {
        if !self.tables.contains_key(name) {
            return Err(DbError::TableNotFound(name.to_string()));
        }
        for table in self.tables.values_mut() {
            table.schema_mut().retain_constraints(|c| {
                !matches!(c, Constraint::ForeignKey { ref_table, .. } if ref_table == name)
            });
        }
        self.tables.remove(name);
        Ok(())
    }

    /// Builds a record from parallel column/value lists and inserts it.
    /// Single-quoted values are unwrapped first.
    pub fn insert(
        &mut self,
        table: &str,
        columns: &[String],
        values: &[String],
    ) -> Result<(), DbError> {
        if columns.len() != values.len() {
            return Err(DbError::Parse(
                "number of columns and values do not match".to_string(),
            ));
        }
        let mut record = Record::new();
        for (col, val) in columns.iter().zip(values) {
            record.set_value(col.clone(), strip_apostrophes(val).to_string());
        }
        self.table_mut(table)?.insert_record(record)
    }

    /// Materializes the records matching `condition`, projected onto
    /// `columns` (`["*"]` selects every schema column, in schema order).
    /// A record lacking a projected column yields an empty string.
    pub fn select(
        &self,
        table: &str,
        columns: &[String],
        condition: &str,
    ) -> Result<RowSet, DbError> {
        let table = self.table(table)?;

        let cond = condition.trim();
        let filter = if cond.is_empty() || cond == "all" {
            None
        } else {
            let (col, val) = split_condition(cond)?;
            Some((col, strip_apostrophes(val)))
        };

        let projected: Vec<String> = if columns.len() == 1 && columns[0] == "*" {
            table
                .schema()
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect()
        } else {
            columns.to_vec()
        };

        let mut rows = Vec::new();
        for record in table.records() {
            if let Some((col, val)) = filter {
                match record.get_value(col) {
                    Ok(v) if v == val => {}
                    _ => continue,
                }
            }
            let row = projected
                .iter()
                .map(|col| record.get_value(col).unwrap_or("").to_string())
                .collect();
            rows.push(row);
        }

        Ok(RowSet {
            columns: projected,
            rows,
        })
    }

    /// Applies the assignments to every record matching `condition`,
    /// returning how many records were updated.
    pub fn update(
        &mut self,
        table: &str,
        assignments: &[(String, String)],
        condition: &str,
    ) -> Result<usize, DbError> {
        let mut template = Record::new();
        for (col, val) in assignments {
            template.set_value(col.clone(), val.clone());
        }
        self.table_mut(table)?.update_records(&template, condition)
    }

    /// Deletes every record matching `condition`, returning how many were
    /// removed.
    pub fn remove(&mut self, table: &str, condition: &str) -> Result<usize, DbError> {
        self.table_mut(table)?.delete_records(condition)
    }

    pub(crate) fn tables(&self) -> &HashMap<String, Table> {
        &self.tables
    }

    /// Discards every table. Load clears the catalog up front, so a parse
    /// failure partway through leaves a partially loaded catalog.
    pub(crate) fn clear(&mut self) {
        if !self.tables.is_empty() {
            warn!(count = self.tables.len(), "discarding existing tables");
        }
        self.tables.clear();
    }
}
