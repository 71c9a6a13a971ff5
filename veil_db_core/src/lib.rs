pub mod engine;
pub mod error;
pub mod parser;
pub mod storage;
pub mod types;

pub use error::DbError;
pub use storage::{Catalog, Cipher, Record, RowSet, XorCipher};

/// Convenience facade: one catalog plus the default persistence cipher.
#[derive(Debug, Default)]
pub struct Database {
    catalog: Catalog,
    cipher: XorCipher,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and executes one command, returning its result text.
    pub fn execute(&mut self, input: &str) -> Result<String, DbError> {
        let cmd = parser::parser::parse(input)?;
        engine::execute_command(cmd, &mut self.catalog, &self.cipher)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }
}
