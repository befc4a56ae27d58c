//! Terminal preview of delimited text files.

pub mod process;
pub mod render;
pub mod source;
pub mod types;
