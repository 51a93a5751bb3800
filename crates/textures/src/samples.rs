//! The reference textures each codec is checked against, with the container each one ships in.
use tex2d_library::ContainerFormat;

use crate::formats::Codec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCase {
  pub name: &'static str,
  pub container: ContainerFormat,
  pub codec: Codec,
}

impl SampleCase {
  const fn new(name: &'static str, container: ContainerFormat, codec: Codec) -> Self {
    Self {
      name,
      container,
      codec,
    }
  }

  pub fn file_name(&self) -> String {
    format!("{}.{}", self.name, self.container.extension())
  }
}

use ContainerFormat::{Crn, Dds, Ktx2};

pub const SAMPLE_CASES: &[SampleCase] = &[
  SampleCase::new("ATC_RGB", Dds, Codec::ATC_RGB4),
  SampleCase::new("ATC_RGBA_Explicit", Dds, Codec::ATC_RGBA8),
  SampleCase::new("ATC_RGBA_Interpolated", Dds, Codec::ATC_RGBA8),
  SampleCase::new("ASTC_4x4", Ktx2, Codec::ASTC_4x4),
  SampleCase::new("ASTC_5x4", Ktx2, Codec::ASTC_5x4),
  SampleCase::new("ASTC_5x5", Ktx2, Codec::ASTC_5x5),
  SampleCase::new("ASTC_6x5", Ktx2, Codec::ASTC_6x5),
  SampleCase::new("ASTC_6x6", Ktx2, Codec::ASTC_6x6),
  SampleCase::new("ASTC_8x5", Ktx2, Codec::ASTC_8x5),
  SampleCase::new("ASTC_8x6", Ktx2, Codec::ASTC_8x6),
  SampleCase::new("ASTC_8x8", Ktx2, Codec::ASTC_8x8),
  SampleCase::new("BC1", Ktx2, Codec::BC1),
  SampleCase::new("BC3", Ktx2, Codec::BC3),
  SampleCase::new("BC4", Ktx2, Codec::BC4),
  SampleCase::new("BC5", Ktx2, Codec::BC5),
  SampleCase::new("BC6H", Ktx2, Codec::BC6H_UF16),
  SampleCase::new("BC7", Ktx2, Codec::BC7),
  SampleCase::new("ETC1_RGB", Ktx2, Codec::ETC1),
  SampleCase::new("ETC2_RGB", Ktx2, Codec::ETC2_RGB),
  SampleCase::new("ETC2_RGBA", Ktx2, Codec::ETC2_RGBA8),
  SampleCase::new("ETC2_RGB_A1", Ktx2, Codec::ETC2_RGBA1),
  SampleCase::new("EAC_R11", Ktx2, Codec::EAC_R11),
  SampleCase::new("EAC_RG11", Ktx2, Codec::EAC_RG11),
  SampleCase::new("PVRTCI_2bpp_RGB", Ktx2, Codec::PVRTC_2bpp),
  SampleCase::new("PVRTCI_2bpp_RGBA", Ktx2, Codec::PVRTC_2bpp),
  SampleCase::new("PVRTCI_4bpp_RGB", Ktx2, Codec::PVRTC_4bpp),
  SampleCase::new("PVRTCI_4bpp_RGBA", Ktx2, Codec::PVRTC_4bpp),
  SampleCase::new("CRUNCH_DXT1", Crn, Codec::Crunch),
  SampleCase::new("CRUNCH_DXT5", Crn, Codec::Crunch),
  SampleCase::new("CRUNCH_DXT5A", Crn, Codec::Crunch),
  SampleCase::new("CRUNCH_DXN", Crn, Codec::Crunch),
  SampleCase::new("UNITYCRUNCH_DXT1", Crn, Codec::UnityCrunch),
  SampleCase::new("UNITYCRUNCH_DXT5", Crn, Codec::UnityCrunch),
  SampleCase::new("UNITYCRUNCH_DXT5A", Crn, Codec::UnityCrunch),
  SampleCase::new("UNITYCRUNCH_DXN", Crn, Codec::UnityCrunch),
  SampleCase::new("UNITYCRUNCH_ETC1", Crn, Codec::UnityCrunch),
  SampleCase::new("UNITYCRUNCH_ETC1S", Crn, Codec::UnityCrunch),
  SampleCase::new("UNITYCRUNCH_ETC2", Crn, Codec::UnityCrunch),
  SampleCase::new("UNITYCRUNCH_ETC2A", Crn, Codec::UnityCrunch),
  SampleCase::new("UNITYCRUNCH_ETC2AS", Crn, Codec::UnityCrunch),
];

/// Looks a case up by its name or its file name.
pub fn find(name: &str) -> Option<&'static SampleCase> {
  SAMPLE_CASES
    .iter()
    .find(|case| case.name == name || case.file_name() == name)
}
