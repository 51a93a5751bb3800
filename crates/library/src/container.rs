use std::{fmt, path::Path};

use snafu::OptionExt;

use crate::{
  crn::reader::CrnReader,
  dds::reader::DdsReader,
  error::{ParseError, UnrecognizedFormatSnafu},
  ktx2::reader::Ktx2Reader,
  texture::Texture,
};

/// The container wrapped around a compressed payload.
///
/// Selecting a container never inspects the file contents, the tag comes from the caller
/// (usually through the file extension) and the matching reader only validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
  Ktx2,
  Dds,
  Crn,
}

impl ContainerFormat {
  pub const ALL: [ContainerFormat; 3] = [Self::Ktx2, Self::Dds, Self::Crn];

  pub const fn extension(self) -> &'static str {
    match self {
      Self::Ktx2 => "ktx2",
      Self::Dds => "dds",
      Self::Crn => "crn",
    }
  }

  pub fn from_extension(extension: &str) -> Result<Self, ParseError> {
    Self::ALL
      .into_iter()
      .find(|format| format.extension().eq_ignore_ascii_case(extension))
      .context(UnrecognizedFormatSnafu { extension })
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
    let extension = path
      .as_ref()
      .extension()
      .map(|extension| extension.to_string_lossy())
      .unwrap_or_default();

    Self::from_extension(&extension)
  }
}

impl fmt::Display for ContainerFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}

/// Reads the first mip level out of `data` using the reader for `format`.
pub fn parse(data: &[u8], format: ContainerFormat) -> Result<Texture<'_>, ParseError> {
  match format {
    ContainerFormat::Ktx2 => Ktx2Reader::new(data).map(|reader| reader.texture()),
    ContainerFormat::Dds => DdsReader::new(data).map(|reader| reader.texture()),
    ContainerFormat::Crn => CrnReader::new(data).map(|reader| reader.texture()),
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;
  use crate::test_prelude::{crn_file, dds_file, ktx2_file};

  #[rstest]
  #[case("ktx2", ContainerFormat::Ktx2)]
  #[case("dds", ContainerFormat::Dds)]
  #[case("crn", ContainerFormat::Crn)]
  #[case("DDS", ContainerFormat::Dds)]
  #[case("Ktx2", ContainerFormat::Ktx2)]
  fn extensions_select_their_container(#[case] extension: &str, #[case] expected: ContainerFormat) {
    assert_eq!(ContainerFormat::from_extension(extension).unwrap(), expected);
  }

  #[rstest]
  #[case("png")]
  #[case("ktx")]
  #[case("")]
  fn unknown_extensions_are_rejected(#[case] extension: &str) {
    let error = ContainerFormat::from_extension(extension).unwrap_err();
    assert!(
      matches!(&error, ParseError::UnrecognizedFormat { extension: actual, .. } if actual == extension)
    );
  }

  #[test]
  fn paths_are_detected_by_extension() {
    assert_eq!(
      ContainerFormat::from_path("resources/tests/textures/BC7.ktx2").unwrap(),
      ContainerFormat::Ktx2
    );
    assert_eq!(
      ContainerFormat::from_path("CRUNCH_DXT5.crn").unwrap(),
      ContainerFormat::Crn
    );
    assert!(matches!(
      ContainerFormat::from_path("no_extension"),
      Err(ParseError::UnrecognizedFormat { .. })
    ));
  }

  #[test]
  fn parse_dispatches_on_the_format_tag() {
    let ktx2 = ktx2_file(4, 4, 104, &[1; 8]);
    let dds = dds_file(124, *b"DXT1", 4, 4, &[2; 8]);
    let crn = crn_file(8, 4, 32);

    assert_eq!(parse(&ktx2, ContainerFormat::Ktx2).unwrap().payload(), &[1; 8]);
    assert_eq!(parse(&dds, ContainerFormat::Dds).unwrap().payload(), &[2; 8]);
    assert_eq!(parse(&crn, ContainerFormat::Crn).unwrap().payload(), &crn[..]);
  }

  #[test]
  fn the_tag_is_not_guessed_from_contents() {
    let dds = dds_file(124, *b"DXT1", 4, 4, &[2; 8]);
    assert!(matches!(
      parse(&dds, ContainerFormat::Ktx2),
      Err(ParseError::InvalidMagic {
        container: ContainerFormat::Ktx2,
        ..
      })
    ));
  }
}
