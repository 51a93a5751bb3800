//! DirectDraw Surface containers with the legacy 124 byte header.
pub mod reader;
pub mod types;

pub use reader::DdsReader;
