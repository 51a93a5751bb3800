use num_derive::FromPrimitive;
use zerocopy::{
  FromBytes, Immutable, IntoBytes, KnownLayout,
  little_endian::{U32, U64},
};

/// `«KTX 20»\r\n\x1A\n`
pub const MAGIC: &[u8; 12] = &[
  0xAB, 0x4B, 0x54, 0x58, 0x20, 0x32, 0x30, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

#[derive(Debug, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Ktx2Header {
  pub identifier: [u8; 12],
  pub vk_format: U32,
  pub type_size: U32,
  pub pixel_width: U32,
  pub pixel_height: U32,
  pub pixel_depth: U32,
  pub layer_count: U32,
  pub face_count: U32,
  pub level_count: U32,
  pub supercompression_scheme: U32,
  pub dfd_byte_offset: U32,
  pub dfd_byte_length: U32,
  pub kvd_byte_offset: U32,
  pub kvd_byte_length: U32,
  pub sgd_byte_offset: U64,
  pub sgd_byte_length: U64,
}

/// The part of level 0's index entry that locates it. The entry directly follows the header,
/// its trailing `uncompressedByteLength` is only read when present.
#[derive(Debug, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct LevelZero {
  pub byte_offset: U64,
  pub byte_length: U64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum SupercompressionScheme {
  Disabled = 0,
  BasisLz = 1,
  Zstandard = 2,
  Zlib = 3,
}
