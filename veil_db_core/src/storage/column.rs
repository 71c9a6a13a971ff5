use crate::types::datatype::DataType;

/// Represents a single column in a table schema.
///
/// Pure value object: no validation at construction (an empty name is
/// accepted) and no mutation afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    dtype: DataType,
    nullable: bool,
    default_value: String,
}

impl Column {
    /// Creates a nullable column with an empty default value.
    pub fn new(name: impl Into<String>, dtype: DataType) -> Self {
        Self::with_options(name, dtype, true, "")
    }

    pub fn with_options(
        name: impl Into<String>,
        dtype: DataType,
        nullable: bool,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dtype,
            nullable,
            default_value: default_value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}
