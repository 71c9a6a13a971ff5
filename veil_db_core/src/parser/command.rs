use crate::types::datatype::DataType;

/// Column definition inside CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub dtype: DataType,
    pub not_null: bool,
}

/// Table-level constraint definition inside CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraintDef {
    PrimaryKey(Vec<String>),
    Unique(Vec<String>),
    ForeignKey {
        columns: Vec<String>,
        ref_table: String,
        ref_columns: Vec<String>,
    },
}

/// A fully recognized command, ready for the engine.
///
/// Condition strings are carried verbatim (trimmed, semicolon stripped);
/// quote handling happens downstream, per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateTable {
        table: String,
        columns: Vec<ColumnDef>,
        constraints: Vec<TableConstraintDef>,
    },
    DropTable {
        table: String,
    },
    DropColumn {
        table: String,
        column: String,
    },
    Insert {
        table: String,
        columns: Vec<String>,
        values: Vec<String>,
    },
    Select {
        table: String,
        columns: Vec<String>,
        condition: String,
    },
    Update {
        table: String,
        assignments: Vec<(String, String)>,
        condition: String,
    },
    Delete {
        table: String,
        condition: String,
    },
    Flush {
        path: String,
        key: String,
    },
    Load {
        path: String,
        key: String,
    },
}
