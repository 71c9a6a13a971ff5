pub mod execute;
pub mod format;

pub use execute::execute_command;
