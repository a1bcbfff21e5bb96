//! Filesystem helpers for the command-line front end.
//!
//! - [`file_list`]: glob expansion and recursive directory walks

pub mod file_list;

pub use file_list::{create_file_list, expand_glob, expand_inputs, is_glob_pattern};
