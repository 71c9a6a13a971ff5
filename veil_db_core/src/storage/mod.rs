pub mod catalog;
pub mod cipher;
pub mod column;
pub mod constraint;
pub mod persist;
pub mod record;
pub mod schema;
pub mod table;

pub use catalog::{Catalog, RowSet};
pub use cipher::{Cipher, XorCipher};
pub use column::Column;
pub use constraint::Constraint;
pub use record::Record;
pub use schema::Schema;
pub use table::Table;
