//! CSV point-list codec.
//!
//! The format is plain comma-separated rows with no header, three numeric
//! fields per row in (x, y, z) order. Row order is significant: it decides
//! line-segment connectivity on import.

pub mod decode;
pub mod encode;
pub mod errors;
pub mod file;

pub use decode::decode;
pub use encode::encode;
pub use errors::CsvError;
pub use file::{read_points_file, write_points_file};
