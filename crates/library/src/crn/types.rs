use num_derive::FromPrimitive;
use zerocopy::{
  FromBytes, Immutable, IntoBytes, KnownLayout,
  big_endian::{U16, U32},
};

pub const SIGNATURE: &[u8; 2] = b"Hx";

pub const LEVEL_COUNT_OFFSET: usize = 16;
pub const FACE_COUNT_OFFSET: usize = 17;
pub const FORMAT_OFFSET: usize = 18;

/// The fixed prefix of a Crunch header, everything after `height` is left to the decoder.
#[derive(Debug, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct CrnHeader {
  pub signature: [u8; 2],
  pub header_size: U16,
  pub header_crc16: U16,
  pub data_size: U32,
  pub data_crc16: U16,
  pub width: U16,
  pub height: U16,
}

/// The block format a Crunch stream unpacks to. `Etc2` and later only appear in Unity's fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum CrnFormat {
  Dxt1 = 0,
  Dxt3 = 1,
  Dxt5 = 2,
  Dxt5CCxY = 3,
  Dxt5xGxR = 4,
  Dxt5xGBR = 5,
  Dxt5AGBR = 6,
  DxnXY = 7,
  DxnYX = 8,
  Dxt5A = 9,
  Etc1 = 10,
  Etc2 = 11,
  Etc2A = 12,
  Etc1S = 13,
  Etc2AS = 14,
}
