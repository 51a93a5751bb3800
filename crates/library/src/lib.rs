//! Readers for the containers compressed textures are shipped in.
//!
//! Each reader validates its container and locates the compressed bytes of the first mip
//! level without copying them. Decompressing those bytes is left to the caller.
//!
//! | Container | Width | Height | Level 0 |
//! |---|---|---|---|
//! | KTX2 | `u32` LE at 20 | `u32` LE at 24 | `[u64 LE at 80, + u64 LE at 88)` |
//! | DDS | `u32` LE at 16 | `u32` LE at 12 | `[u32 LE at 4 + 4, + width * height * block / 16)` |
//! | CRN | `u16` BE at 12 | `u16` BE at 14 | the whole file |
pub mod container;
pub mod crn;
pub mod dds;
pub mod error;
pub mod ktx2;
mod owned;
mod texture;
mod util;

#[cfg(any(test, feature = "test-util"))]
pub mod test_prelude;

pub use container::{ContainerFormat, parse};
pub use error::ParseError;
pub use owned::OwnedTexture;
pub use texture::Texture;
