use modular_bitfield::prelude::*;
use num_derive::FromPrimitive;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned, little_endian::U32};

pub const MAGIC: &[u8; 4] = b"DDS ";

#[bitfield(bytes = 4)]
#[derive(Debug, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(transparent)]
pub struct PixelFormatFlags {
  pub alpha_pixels: bool,
  pub alpha: bool,
  pub four_cc: bool,
  padding_0: B3,
  pub rgb: bool,
  padding_1: B2,
  pub yuv: bool,
  padding_2: B7,
  pub luminance: bool,
  padding_3: B14,
}

#[derive(Debug, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct PixelFormat {
  pub size: U32,
  pub flags: PixelFormatFlags,
  pub four_cc: U32,
  pub rgb_bit_count: U32,
  pub r_bit_mask: U32,
  pub g_bit_mask: U32,
  pub b_bit_mask: U32,
  pub a_bit_mask: U32,
}

/// Includes the magic, so `size` is 4 bytes smaller than this struct.
#[derive(Debug, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct DdsHeader {
  pub magic: [u8; 4],
  pub size: U32,
  pub flags: U32,
  pub height: U32,
  pub width: U32,
  pub pitch_or_linear_size: U32,
  pub depth: U32,
  pub mip_map_count: U32,
  _reserved_1: [U32; 11],
  pub pixel_format: PixelFormat,
  pub caps: U32,
  pub caps_2: U32,
  pub caps_3: U32,
  pub caps_4: U32,
  _reserved_2: U32,
}

/// FourCCs this crate knows by name, stored little endian like in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u32)]
pub enum FourCc {
  Dxt1 = u32::from_le_bytes(*b"DXT1"),
  Dxt2 = u32::from_le_bytes(*b"DXT2"),
  Dxt3 = u32::from_le_bytes(*b"DXT3"),
  Dxt4 = u32::from_le_bytes(*b"DXT4"),
  Dxt5 = u32::from_le_bytes(*b"DXT5"),
  Ati1 = u32::from_le_bytes(*b"ATI1"),
  Ati2 = u32::from_le_bytes(*b"ATI2"),
  Bc4U = u32::from_le_bytes(*b"BC4U"),
  Bc5U = u32::from_le_bytes(*b"BC5U"),
  Dx10 = u32::from_le_bytes(*b"DX10"),
  Atc = u32::from_le_bytes(*b"ATC "),
  AtcExplicitAlpha = u32::from_le_bytes(*b"ATCA"),
  AtcInterpolatedAlpha = u32::from_le_bytes(*b"ATCI"),
}

/// Renders a fourCC the way it is spelled in the file, e.g. `DXT1`.
pub fn four_cc_name(value: u32) -> String {
  String::from_utf8_lossy(&value.to_le_bytes()).into_owned()
}
