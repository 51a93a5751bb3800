use std::fmt;

/// Block compression codecs a container payload can hold.
///
/// The container does not say which one is used (a KTX2 file can hold any of them), the
/// caller picks it.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
  ATC_RGB4,
  ATC_RGBA8,
  ASTC_4x4,
  ASTC_5x4,
  ASTC_5x5,
  ASTC_6x5,
  ASTC_6x6,
  ASTC_8x5,
  ASTC_8x6,
  ASTC_8x8,
  ASTC_10x5,
  ASTC_10x6,
  ASTC_10x8,
  ASTC_10x10,
  ASTC_12x10,
  ASTC_12x12,
  BC1,
  BC2,
  BC3,
  BC4,
  BC5,
  BC6H_SF16,
  BC6H_UF16,
  BC7,
  ETC1,
  ETC2_RGB,
  ETC2_RGBA1,
  ETC2_RGBA8,
  EAC_R11,
  EAC_R11_Signed,
  EAC_RG11,
  EAC_RG11_Signed,
  PVRTC_2bpp,
  PVRTC_4bpp,
  Crunch,
  UnityCrunch,
}

impl Codec {
  pub const ALL: [Codec; 36] = [
    Self::ATC_RGB4,
    Self::ATC_RGBA8,
    Self::ASTC_4x4,
    Self::ASTC_5x4,
    Self::ASTC_5x5,
    Self::ASTC_6x5,
    Self::ASTC_6x6,
    Self::ASTC_8x5,
    Self::ASTC_8x6,
    Self::ASTC_8x8,
    Self::ASTC_10x5,
    Self::ASTC_10x6,
    Self::ASTC_10x8,
    Self::ASTC_10x10,
    Self::ASTC_12x10,
    Self::ASTC_12x12,
    Self::BC1,
    Self::BC2,
    Self::BC3,
    Self::BC4,
    Self::BC5,
    Self::BC6H_SF16,
    Self::BC6H_UF16,
    Self::BC7,
    Self::ETC1,
    Self::ETC2_RGB,
    Self::ETC2_RGBA1,
    Self::ETC2_RGBA8,
    Self::EAC_R11,
    Self::EAC_R11_Signed,
    Self::EAC_RG11,
    Self::EAC_RG11_Signed,
    Self::PVRTC_2bpp,
    Self::PVRTC_4bpp,
    Self::Crunch,
    Self::UnityCrunch,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Self::ATC_RGB4 => "ATC_RGB4",
      Self::ATC_RGBA8 => "ATC_RGBA8",
      Self::ASTC_4x4 => "ASTC_4x4",
      Self::ASTC_5x4 => "ASTC_5x4",
      Self::ASTC_5x5 => "ASTC_5x5",
      Self::ASTC_6x5 => "ASTC_6x5",
      Self::ASTC_6x6 => "ASTC_6x6",
      Self::ASTC_8x5 => "ASTC_8x5",
      Self::ASTC_8x6 => "ASTC_8x6",
      Self::ASTC_8x8 => "ASTC_8x8",
      Self::ASTC_10x5 => "ASTC_10x5",
      Self::ASTC_10x6 => "ASTC_10x6",
      Self::ASTC_10x8 => "ASTC_10x8",
      Self::ASTC_10x10 => "ASTC_10x10",
      Self::ASTC_12x10 => "ASTC_12x10",
      Self::ASTC_12x12 => "ASTC_12x12",
      Self::BC1 => "BC1",
      Self::BC2 => "BC2",
      Self::BC3 => "BC3",
      Self::BC4 => "BC4",
      Self::BC5 => "BC5",
      Self::BC6H_SF16 => "BC6H_SF16",
      Self::BC6H_UF16 => "BC6H_UF16",
      Self::BC7 => "BC7",
      Self::ETC1 => "ETC1",
      Self::ETC2_RGB => "ETC2_RGB",
      Self::ETC2_RGBA1 => "ETC2_RGBA1",
      Self::ETC2_RGBA8 => "ETC2_RGBA8",
      Self::EAC_R11 => "EAC_R11",
      Self::EAC_R11_Signed => "EAC_R11_Signed",
      Self::EAC_RG11 => "EAC_RG11",
      Self::EAC_RG11_Signed => "EAC_RG11_Signed",
      Self::PVRTC_2bpp => "PVRTC_2bpp",
      Self::PVRTC_4bpp => "PVRTC_4bpp",
      Self::Crunch => "Crunch",
      Self::UnityCrunch => "UnityCrunch",
    }
  }

  /// Looks a codec up by [`Codec::name`], ignoring case.
  pub fn from_name(name: &str) -> Option<Codec> {
    Self::ALL
      .into_iter()
      .find(|codec| codec.name().eq_ignore_ascii_case(name))
  }

  /// Pixels covered by one block, [`None`] for Crunch streams.
  pub const fn block_footprint(self) -> Option<(u32, u32)> {
    match self {
      Self::ASTC_4x4 => Some((4, 4)),
      Self::ASTC_5x4 => Some((5, 4)),
      Self::ASTC_5x5 => Some((5, 5)),
      Self::ASTC_6x5 => Some((6, 5)),
      Self::ASTC_6x6 => Some((6, 6)),
      Self::ASTC_8x5 => Some((8, 5)),
      Self::ASTC_8x6 => Some((8, 6)),
      Self::ASTC_8x8 => Some((8, 8)),
      Self::ASTC_10x5 => Some((10, 5)),
      Self::ASTC_10x6 => Some((10, 6)),
      Self::ASTC_10x8 => Some((10, 8)),
      Self::ASTC_10x10 => Some((10, 10)),
      Self::ASTC_12x10 => Some((12, 10)),
      Self::ASTC_12x12 => Some((12, 12)),
      Self::PVRTC_2bpp => Some((8, 4)),
      Self::Crunch | Self::UnityCrunch => None,
      _ => Some((4, 4)),
    }
  }

  pub const fn block_byte_size(self) -> Option<u32> {
    match self {
      Self::ATC_RGB4
      | Self::BC1
      | Self::BC4
      | Self::ETC1
      | Self::ETC2_RGB
      | Self::ETC2_RGBA1
      | Self::EAC_R11
      | Self::EAC_R11_Signed
      | Self::PVRTC_2bpp
      | Self::PVRTC_4bpp => Some(8),
      Self::Crunch | Self::UnityCrunch => None,
      _ => Some(16),
    }
  }

  /// Bytes a whole image of `width` by `height` pixels takes once compressed.
  ///
  /// Partial blocks at the right and bottom edges are counted as whole blocks. PVRTC images
  /// are at least 2x2 blocks. [`None`] for Crunch, whose streams have no fixed size.
  pub fn compressed_size(self, width: u32, height: u32) -> Option<usize> {
    let (block_width, block_height) = self.block_footprint()?;
    let block_size = self.block_byte_size()? as usize;

    let mut blocks_x = width.div_ceil(block_width) as usize;
    let mut blocks_y = height.div_ceil(block_height) as usize;
    if matches!(self, Self::PVRTC_2bpp | Self::PVRTC_4bpp) {
      blocks_x = blocks_x.max(2);
      blocks_y = blocks_y.max(2);
    }

    blocks_x.checked_mul(blocks_y)?.checked_mul(block_size)
  }

  pub const fn is_crunch(self) -> bool {
    matches!(self, Self::Crunch | Self::UnityCrunch)
  }
}

impl fmt::Display for Codec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  #[test]
  fn names_round_trip() {
    for codec in Codec::ALL {
      assert_eq!(Codec::from_name(codec.name()), Some(codec));
    }
    assert_eq!(Codec::from_name("bc6h_uf16"), Some(Codec::BC6H_UF16));
    assert_eq!(Codec::from_name("BC8"), None);
  }

  #[rstest]
  #[case(Codec::BC1, 4, 4, Some(8))]
  #[case(Codec::BC1, 5, 5, Some(32))]
  #[case(Codec::BC7, 256, 256, Some(65536))]
  #[case(Codec::ETC2_RGBA8, 16, 8, Some(128))]
  #[case(Codec::EAC_R11, 16, 8, Some(64))]
  #[case(Codec::ASTC_12x12, 256, 256, Some(7744))]
  #[case(Codec::ASTC_5x4, 10, 8, Some(64))]
  #[case(Codec::PVRTC_4bpp, 256, 256, Some(32768))]
  #[case(Codec::PVRTC_4bpp, 4, 4, Some(32))]
  #[case(Codec::PVRTC_2bpp, 256, 256, Some(16384))]
  #[case(Codec::PVRTC_2bpp, 8, 8, Some(32))]
  #[case(Codec::Crunch, 256, 256, None)]
  #[case(Codec::UnityCrunch, 4, 4, None)]
  fn compressed_sizes_follow_the_block_layout(
    #[case] codec: Codec,
    #[case] width: u32,
    #[case] height: u32,
    #[case] expected: Option<usize>,
  ) {
    assert_eq!(codec.compressed_size(width, height), expected);
  }

  #[test]
  fn only_crunch_streams_lack_a_block_layout() {
    for codec in Codec::ALL {
      assert_eq!(codec.block_footprint().is_none(), codec.is_crunch(), "{codec}");
      assert_eq!(codec.block_byte_size().is_none(), codec.is_crunch(), "{codec}");
    }
  }
}
