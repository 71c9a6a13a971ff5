use std::path::Path;

use crate::engine::format::format_select;
use crate::error::DbError;
use crate::parser::command::{ColumnDef, Command, TableConstraintDef};
use crate::storage::{Catalog, Cipher, Column, Constraint, Schema, Table};

/// Executes a parsed command against the catalog, using `cipher` for the
/// persistence transform.
pub fn execute_command(
    cmd: Command,
    catalog: &mut Catalog,
    cipher: &dyn Cipher,
) -> Result<String, DbError> {
    match cmd {
        Command::CreateTable {
            table,
            columns,
            constraints,
        } => handle_create(table, columns, constraints, catalog),
        Command::DropTable { table } => {
            catalog.drop_table(&table)?;
            Ok(format!("dropped table {table}"))
        }
        Command::DropColumn { table, column } => {
            catalog.table_mut(&table)?.drop_column(&column)?;
            Ok(format!("dropped column {column} from {table}"))
        }
        Command::Insert {
            table,
            columns,
            values,
        } => {
            catalog.insert(&table, &columns, &values)?;
            Ok(format!("inserted 1 row into {table}"))
        }
        Command::Select {
            table,
            columns,
            condition,
        } => {
            let rows = catalog.select(&table, &columns, &condition)?;
            Ok(format_select(&rows))
        }
        Command::Update {
            table,
            assignments,
            condition,
        } => {
            let updated = catalog.update(&table, &assignments, &condition)?;
            Ok(format!("updated {updated} row(s) in {table}"))
        }
        Command::Delete { table, condition } => {
            let deleted = catalog.remove(&table, &condition)?;
            Ok(format!("deleted {deleted} row(s) from {table}"))
        }
        Command::Flush { path, key } => {
            catalog.flush_to_file(Path::new(&path), &key, cipher)?;
            Ok(format!("database flushed to {path}"))
        }
        Command::Load { path, key } => {
            let loaded = catalog.load_from_file(Path::new(&path), &key, cipher)?;
            Ok(format!("loaded {loaded} table(s) from {path}"))
        }
    }
}

fn handle_create(
    table: String,
    columns: Vec<ColumnDef>,
    constraints: Vec<TableConstraintDef>,
    catalog: &mut Catalog,
) -> Result<String, DbError> {
    if catalog.exists(&table) {
        return Err(DbError::TableExists(table));
    }

    let mut schema = Schema::new();
    for def in columns {
        schema.add_column(Column::with_options(def.name, def.dtype, !def.not_null, ""));
    }
    for def in constraints {
        schema.add_constraint(match def {
            TableConstraintDef::PrimaryKey(columns) => Constraint::PrimaryKey { columns },
            TableConstraintDef::Unique(columns) => Constraint::Unique { columns },
            TableConstraintDef::ForeignKey {
                columns,
                ref_table,
                ref_columns,
            } => Constraint::ForeignKey {
                columns,
                ref_table,
                ref_columns,
            },
        });
    }

    catalog.add_table(table.clone(), Table::new(table.clone(), schema));
    Ok(format!("created table {table}"))
}
