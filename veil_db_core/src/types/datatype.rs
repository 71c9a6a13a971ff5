use crate::error::DbError;

/// Declared column type. Stored values are always strings; the declared
/// type is schema metadata only and is never used to coerce or reject
/// values on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Float,
    String,
}

pub fn parse_datatype(s: &str) -> Result<DataType, DbError> {
    match s.to_lowercase().as_str() {
        "integer" => Ok(DataType::Integer),
        "float" => Ok(DataType::Float),
        "string" => Ok(DataType::String),
        other => Err(DbError::Parse(format!(
            "Unknown type '{other}'. Use INTEGER|FLOAT|STRING"
        ))),
    }
}
