pub mod paths;
pub mod shell;

pub use paths::{has_json_extension, validate_file_size};
pub use shell::quote_for_double_quotes;
