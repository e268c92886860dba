//! Working-tree change summaries built from git status and diff output.

pub mod change_set;
pub mod parser;
pub mod reader;

pub use change_set::{ChangeSet, FileDetails};
pub use parser::{apply_status, parse_changes, parse_diff};
pub use reader::read_changes;
