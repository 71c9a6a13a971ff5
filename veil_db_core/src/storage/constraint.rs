use tracing::warn;

/// Integrity rule attached to a schema.
///
/// `validate` checks only the local shape rules over a candidate tuple
/// (values positionally aligned to `column_names`). Cross-record
/// enforcement (uniqueness scans against existing rows) is the table's
/// job, not the constraint's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    PrimaryKey {
        columns: Vec<String>,
    },
    Unique {
        columns: Vec<String>,
    },
    ForeignKey {
        columns: Vec<String>,
        ref_table: String,
        ref_columns: Vec<String>,
    },
}

impl Constraint {
    /// The local columns this constraint covers.
    pub fn column_names(&self) -> &[String] {
        match self {
            Constraint::PrimaryKey { columns }
            | Constraint::Unique { columns }
            | Constraint::ForeignKey { columns, .. } => columns,
        }
    }

    /// Validates a candidate tuple against the constraint's local rules.
    ///
    /// - PrimaryKey: every value must be non-empty.
    /// - Unique: no duplicate value within the tuple itself.
    /// - ForeignKey: the tuple length must match the column count.
    ///   Referential existence in `ref_table` is not checked.
    pub fn validate(&self, values: &[String]) -> bool {
        match self {
            Constraint::PrimaryKey { columns } => {
                for (i, value) in values.iter().enumerate() {
                    if value.is_empty() {
                        let col = columns.get(i).map(String::as_str).unwrap_or("?");
                        warn!(column = col, "primary key validation failed: empty value");
                        return false;
                    }
                }
                true
            }
            Constraint::Unique { .. } => {
                let mut sorted: Vec<&String> = values.iter().collect();
                sorted.sort();
                for pair in sorted.windows(2) {
                    if pair[0] == pair[1] {
                        warn!(
                            value = %pair[0],
                            "unique validation failed: duplicate value in tuple"
                        );
                        return false;
                    }
                }
                true
            }
            Constraint::ForeignKey { columns, .. } => {
                if values.len() != columns.len() {
                    warn!(
                        expected = columns.len(),
                        got = values.len(),
                        "foreign key validation failed: arity mismatch"
                    );
                    return false;
                }
                true
            }
        }
    }
}
