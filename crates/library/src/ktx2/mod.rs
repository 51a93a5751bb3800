//! [KTX 2.0](https://registry.khronos.org/KTX/specs/2.0/ktxspec.v2.html) containers.
pub mod reader;
pub mod types;

pub use reader::Ktx2Reader;
