//! Persisted file format: a block of
//!
//! ```text
//! TABLE:<name>
//! COLUMNS:<c1>,<c2>,...
//! CONSTRAINTS:<c1>;<c2>;...
//! RECORDS:<N>
//! <v1>|<v2>|...         (N lines, aligned to COLUMNS order)
//! END_TABLE
//! ```
//!
//! per table, no header or checksum. The whole text passes through the
//! keyed byte transform before hitting disk; load applies the inverse
//! first. Column types and nullability are not round-tripped: every
//! loaded column comes back as a nullable STRING.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::DbError;
use crate::storage::catalog::Catalog;
use crate::storage::cipher::Cipher;
use crate::storage::column::Column;
use crate::storage::constraint::Constraint;
use crate::storage::record::Record;
use crate::storage::schema::Schema;
use crate::storage::table::Table;
use crate::types::datatype::DataType;

impl Catalog {
    /// Serializes every table, scrambles the text with `key`, and writes
    /// the result to `path`.
    pub fn flush_to_file(
        &self,
        path: &Path,
        key: &str,
        cipher: &dyn Cipher,
    ) -> Result<(), DbError> {
        let image = self.serialize();
        let scrambled = cipher.transform(image.as_bytes(), key);
        fs::write(path, scrambled)?;
        Ok(())
    }

    /// Reads `path`, unscrambles with `key`, discards every current table
    /// and parses table blocks. Returns the number of tables loaded.
    ///
    /// Not atomic: the catalog is cleared before parsing begins, so a
    /// structural error partway through leaves only the tables parsed so
    /// far. Records are re-inserted through the constraint path; rows
    /// that no longer validate are skipped with a warning.
    pub fn load_from_file(
        &mut self,
        path: &Path,
        key: &str,
        cipher: &dyn Cipher,
    ) -> Result<usize, DbError> {
        let scrambled = fs::read(path)?;
        let plain = cipher.transform(&scrambled, key);
        let text = String::from_utf8_lossy(&plain).into_owned();

        self.clear();

        let mut loaded = 0;
        let mut lines = text.lines();
        while let Some(line) = lines.next() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some(name) = line.strip_prefix("TABLE:") else {
                continue;
            };
            let name = name.trim().to_string();

            match parse_table_block(&name, &mut lines)? {
                Some(table) => {
                    self.add_table(name, table);
                    loaded += 1;
                }
                // Truncated file: keep what was loaded so far.
                None => break,
            }
        }

        Ok(loaded)
    }

    fn serialize(&self) -> String {
        let mut names: Vec<&String> = self.tables().keys().collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            let table = &self.tables()[name];
            let columns = table.schema().columns();

            out.push_str(&format!("TABLE:{name}\n"));
            out.push_str("COLUMNS:");
            out.push_str(
                &columns
                    .iter()
                    .map(Column::name)
                    .collect::<Vec<_>>()
                    .join(","),
            );
            out.push('\n');

            out.push_str("CONSTRAINTS:");
            out.push_str(
                &table
                    .schema()
                    .constraints()
                    .iter()
                    .map(render_constraint)
                    .collect::<Vec<_>>()
                    .join(";"),
            );
            out.push('\n');

            out.push_str(&format!("RECORDS:{}\n", table.records().len()));
            for record in table.records() {
                let row = columns
                    .iter()
                    .map(|col| record.get_value(col.name()).unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join("|");
                out.push_str(&row);
                out.push('\n');
            }
            out.push_str("END_TABLE\n");
        }
        out
    }
}

/// Parses the lines following a `TABLE:` marker. Returns `Ok(None)` when
/// the file ends mid-block (truncation drops the partial table, matching
/// load's best-effort contract).
fn parse_table_block<'a>(
    name: &str,
    lines: &mut impl Iterator<Item = &'a str>,
) -> Result<Option<Table>, DbError> {
    let Some(line) = lines.next() else {
        return Ok(None);
    };
    let columns_str = line
        .trim()
        .strip_prefix("COLUMNS:")
        .ok_or_else(|| DbError::Corrupt("expected COLUMNS: line".to_string()))?;
    let column_names = split_list(columns_str);

    // Types and nullability were not persisted.
    let mut schema = Schema::new();
    for col in &column_names {
        schema.add_column(Column::new(col.clone(), DataType::String));
    }

    let Some(line) = lines.next() else {
        return Ok(None);
    };
    let constraints_str = line
        .trim()
        .strip_prefix("CONSTRAINTS:")
        .ok_or_else(|| DbError::Corrupt("expected CONSTRAINTS: line".to_string()))?;
    for token in constraints_str.trim().split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match parse_constraint(token) {
            Some(constraint) => schema.add_constraint(constraint),
            None => warn!(token, "skipping unrecognized constraint"),
        }
    }

    let Some(line) = lines.next() else {
        return Ok(None);
    };
    let count_str = line
        .trim()
        .strip_prefix("RECORDS:")
        .ok_or_else(|| DbError::Corrupt("expected RECORDS: line".to_string()))?;
    let count: usize = count_str
        .trim()
        .parse()
        .map_err(|_| DbError::Corrupt(format!("invalid record count '{}'", count_str.trim())))?;

    let mut table = Table::new(name, schema);
    for _ in 0..count {
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let values = split_values(line.trim());
        let mut record = Record::new();
        for (i, col) in column_names.iter().enumerate() {
            let value = values.get(i).cloned().unwrap_or_default();
            record.set_value(col.clone(), value);
        }
        table.load_record(record);
    }

    let Some(line) = lines.next() else {
        return Ok(None);
    };
    if line.trim() != "END_TABLE" {
        return Err(DbError::Corrupt("expected END_TABLE line".to_string()));
    }

    Ok(Some(table))
}

fn render_constraint(constraint: &Constraint) -> String {
    match constraint {
        Constraint::PrimaryKey { columns } => format!("PK({})", columns.join(",")),
        Constraint::Unique { columns } => format!("UQ({})", columns.join(",")),
        Constraint::ForeignKey {
            columns,
            ref_table,
            ref_columns,
        } => format!(
            "FK({})->{}({})",
            columns.join(","),
            ref_table,
            ref_columns.join(",")
        ),
    }
}

fn parse_constraint(token: &str) -> Option<Constraint> {
    if let Some(body) = token.strip_prefix("PK(").and_then(|t| t.strip_suffix(')')) {
        return Some(Constraint::PrimaryKey {
            columns: split_list(body),
        });
    }
    if let Some(body) = token.strip_prefix("UQ(").and_then(|t| t.strip_suffix(')')) {
        return Some(Constraint::Unique {
            columns: split_list(body),
        });
    }
    if let Some(rest) = token.strip_prefix("FK(") {
        let (local, rest) = rest.split_once(")->")?;
        let (ref_table, ref_cols) = rest.split_once('(')?;
        let ref_cols = ref_cols.strip_suffix(')')?;
        return Some(Constraint::ForeignKey {
            columns: split_list(local),
            ref_table: ref_table.trim().to_string(),
            ref_columns: split_list(ref_cols),
        });
    }
    None
}

fn split_list(s: &str) -> Vec<String> {
    let s = s.trim();
    if s.is_empty() {
        return Vec::new();
    }
    s.split(',').map(|t| t.trim().to_string()).collect()
}

fn split_values(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split('|').map(|t| t.trim().to_string()).collect()
}
