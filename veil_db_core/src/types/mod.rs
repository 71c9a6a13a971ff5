pub mod datatype;

pub use datatype::{DataType, parse_datatype};
