use crate::storage::RowSet;

/// Formats a SELECT result as a tab-separated table, header line first.
pub fn format_select(rows: &RowSet) -> String {
    let header = rows.columns.join("\t");

    if rows.rows.is_empty() {
        return header;
    }

    let body = rows
        .rows
        .iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{header}\n{body}")
}
