use tracing::{debug, warn};

use crate::error::DbError;
use crate::storage::constraint::Constraint;
use crate::storage::record::Record;
use crate::storage::schema::Schema;

/// A named table: one schema plus an ordered collection of records.
///
/// Records are appended in insertion order. Constraint enforcement
/// happens here on insert; updates and deletes never re-validate.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    schema: Schema,
    records: Vec<Record>,
}

impl Table {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }

    /// Validates the record against the schema's constraints and appends
    /// it. The record set is untouched on failure.
    ///
    /// Primary keys require every key column to be present and non-empty
    /// in the record, and the key tuple to be unique among existing
    /// records. Unique constraints allow empty values (which collide with
    /// other empties) but treat a missing column as "no value": such
    /// records never collide and are skipped by the scan. Foreign keys
    /// are declared only; nothing is checked against the referenced table.
    pub fn insert_record(&mut self, record: Record) -> Result<(), DbError> {
        for constraint in self.schema.constraints() {
            match constraint {
                Constraint::PrimaryKey { columns } => {
                    let mut values = Vec::with_capacity(columns.len());
                    for col in columns {
                        match record.get_value(col) {
                            Ok(v) => values.push(v.to_string()),
                            Err(_) => {
                                return Err(DbError::Constraint(format!(
                                    "record is missing column '{col}' required by primary key"
                                )));
                            }
                        }
                    }
                    if !constraint.validate(&values) {
                        return Err(DbError::Constraint(format!(
                            "primary key columns ({}) must be non-empty",
                            columns.join(", ")
                        )));
                    }
                    if self.tuple_exists(columns, &values) {
                        return Err(DbError::Constraint(format!(
                            "duplicate entry for primary key on columns ({})",
                            columns.join(", ")
                        )));
                    }
                }
                Constraint::Unique { columns } => {
                    let mut values = Vec::with_capacity(columns.len());
                    let mut missing = false;
                    for col in columns {
                        match record.get_value(col) {
                            Ok(v) => values.push(v.to_string()),
                            Err(_) => {
                                missing = true;
                                break;
                            }
                        }
                    }
                    // A record with no value for some key column cannot
                    // collide with anything.
                    if missing {
                        continue;
                    }
                    if self.tuple_exists(columns, &values) {
                        return Err(DbError::Constraint(format!(
                            "duplicate entry for unique constraint on columns ({})",
                            columns.join(", ")
                        )));
                    }
                }
                Constraint::ForeignKey { .. } => {}
            }
        }

        self.records.push(record);
        debug!(table = %self.name, "record inserted");
        Ok(())
    }

    /// Overlays every key/value of `template` onto each record matching
    /// `condition`, returning how many records were touched.
    ///
    /// An empty condition or `"all"` updates every record and always
    /// succeeds, even over an empty table. Otherwise the condition must be
    /// of the shape `column = value`; records lacking the column are
    /// silently skipped. The comparison value is not unquoted here
    /// (unlike delete).
    pub fn update_records(&mut self, template: &Record, condition: &str) -> Result<usize, DbError> {
        let cond = condition.trim();
        if cond.is_empty() || cond == "all" {
            for record in &mut self.records {
                apply_template(record, template);
            }
            return Ok(self.records.len());
        }

        let (col, val) = split_condition(cond)?;
        let mut updated = 0;
        for record in &mut self.records {
            match record.get_value(col) {
                Ok(v) if v == val => {
                    apply_template(record, template);
                    updated += 1;
                }
                _ => {}
            }
        }
        if updated == 0 {
            debug!(table = %self.name, condition = cond, "no records match condition");
        }
        Ok(updated)
    }

    /// Removes every record matching `condition`, returning how many were
    /// removed. `"all"` clears the table unconditionally. Single-quoted
    /// comparison values are unwrapped before matching.
    pub fn delete_records(&mut self, condition: &str) -> Result<usize, DbError> {
        let cond = condition.trim();
        if cond == "all" {
            let removed = self.records.len();
            self.records.clear();
            return Ok(removed);
        }

        let (col, val) = split_condition(cond)?;
        let val = strip_apostrophes(val);
        let before = self.records.len();
        self.records
            .retain(|record| !matches!(record.get_value(col), Ok(v) if v == val));
        Ok(before - self.records.len())
    }

    /// Removes a column from the schema and from every record.
    ///
    /// Constraints mentioning the dropped column are left in place.
    pub fn drop_column(&mut self, column: &str) -> Result<(), DbError> {
        if !self.schema.has_column(column) {
            return Err(DbError::ColumnNotFound(column.to_string()));
        }
        self.schema.remove_column(column);
        for record in &mut self.records {
            record.remove_column(column);
        }
        debug!(table = %self.name, column, "column dropped; constraints referencing it are kept");
        Ok(())
    }

    /// Loads a record during catalog deserialization, keeping the catalog
    /// usable when a persisted row violates a constraint.
    pub(crate) fn load_record(&mut self, record: Record) {
        if let Err(err) = self.insert_record(record) {
            warn!(table = %self.name, %err, "skipping persisted record");
        }
    }

    /// True if an existing record carries exactly `values` on `columns`.
    /// Records missing any of the columns are not candidates.
    fn tuple_exists(&self, columns: &[String], values: &[String]) -> bool {
        'records: for existing in &self.records {
            for (col, val) in columns.iter().zip(values) {
                match existing.get_value(col) {
                    Ok(v) if v == val => {}
                    _ => continue 'records,
                }
            }
            return true;
        }
        false
    }
}

fn apply_template(record: &mut Record, template: &Record) {
    for (col, val) in template.data() {
        record.set_value(col.clone(), val.clone());
    }
}

/// Splits a `column = value` condition on the first `=`, trimming both
/// sides. No operator other than equality is recognized.
pub(crate) fn split_condition(cond: &str) -> Result<(&str, &str), DbError> {
    match cond.split_once('=') {
        Some((col, val)) => Ok((col.trim(), val.trim())),
        None => Err(DbError::BadCondition(cond.to_string())),
    }
}

/// Unwraps surrounding single quotes, if present.
pub(crate) fn strip_apostrophes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
