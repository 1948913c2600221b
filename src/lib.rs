// Library crate exposing the disk-space measurement helpers used by the
// upgrade daemon's disk gate

pub mod disk;
pub mod error;
pub mod util;

pub use disk::{dir_size, file_size};
pub use error::{DiskError, DiskResult};
