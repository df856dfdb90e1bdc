//! Delimited file reading utilities.

mod reader;

pub use reader::{
    MAX_TABLE_FILE_SIZE, check_file_size, check_file_size_with_limit, read_delimited,
    validate_encoding,
};
