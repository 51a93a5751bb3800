use std::ops::Range;

use crate::container::ContainerFormat;

/// The first mip level of a texture, borrowed from the file it was read from.
///
/// The payload is kept as a byte range over the source buffer so nothing is copied until
/// [`Texture::to_owned_payload`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture<'a> {
  pub container: ContainerFormat,
  pub width: u32,
  pub height: u32,
  source: &'a [u8],
  payload: Range<usize>,
}

impl<'a> Texture<'a> {
  /// `payload` must lie inside `source`, the readers check this before constructing.
  pub(crate) fn new(
    container: ContainerFormat,
    width: u32,
    height: u32,
    source: &'a [u8],
    payload: Range<usize>,
  ) -> Self {
    debug_assert!(payload.start <= payload.end && payload.end <= source.len());
    Self {
      container,
      width,
      height,
      source,
      payload,
    }
  }

  pub fn payload(&self) -> &'a [u8] {
    &self.source[self.payload.clone()]
  }

  pub fn payload_range(&self) -> Range<usize> {
    self.payload.clone()
  }

  /// The whole file the texture was read from.
  pub fn source(&self) -> &'a [u8] {
    self.source
  }

  pub fn to_owned_payload(&self) -> Vec<u8> {
    self.payload().to_vec()
  }
}

#[cfg(test)]
mod tests {
  use crate::{container::parse, test_prelude::dds_file};

  use super::*;

  #[test]
  fn owned_payload_outlives_the_source() {
    let payload = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
    let owned = {
      let data = dds_file(124, *b"DXT1", 4, 4, &payload);
      let texture = parse(&data, ContainerFormat::Dds).unwrap();
      assert_eq!(texture.source().len(), 136);
      texture.to_owned_payload()
    };

    assert_eq!(owned, payload);
  }
}
