//! File I/O

pub mod fs;

pub use fs::{FsError, copy_contents};
