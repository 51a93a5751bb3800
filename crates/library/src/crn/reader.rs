use num_traits::FromPrimitive;
use snafu::{OptionExt, ensure};
use tracing::{debug, warn};
use zerocopy::FromBytes;

use crate::{
  container::ContainerFormat,
  crn::types::{
    CrnFormat, CrnHeader, FACE_COUNT_OFFSET, FORMAT_OFFSET, LEVEL_COUNT_OFFSET, SIGNATURE,
  },
  error::{EmptyDimensionsSnafu, HeaderOutOfBoundsSnafu, ParseError},
  texture::Texture,
};

const CONTAINER: ContainerFormat = ContainerFormat::Crn;

pub struct CrnReader<'a> {
  data: &'a [u8],
  header: &'a CrnHeader,
}

impl<'a> CrnReader<'a> {
  pub fn new(data: &'a [u8]) -> Result<Self, ParseError> {
    let (header, _) = CrnHeader::ref_from_prefix(data)
      .ok()
      .context(HeaderOutOfBoundsSnafu {
        container: CONTAINER,
        required: size_of::<CrnHeader>(),
        available: data.len(),
      })?;

    if header.signature != *SIGNATURE {
      warn!(signature = ?header.signature, "crn signature is not \"Hx\"");
    }

    let width = u32::from(header.width.get());
    let height = u32::from(header.height.get());
    ensure!(
      width > 0 && height > 0,
      EmptyDimensionsSnafu {
        container: CONTAINER,
        width,
        height
      }
    );

    debug!(width, height, size = data.len(), "read crn header");

    Ok(Self { data, header })
  }

  pub fn header(&self) -> &'a CrnHeader {
    self.header
  }

  pub fn level_count(&self) -> Option<u8> {
    self.data.get(LEVEL_COUNT_OFFSET).copied()
  }

  pub fn face_count(&self) -> Option<u8> {
    self.data.get(FACE_COUNT_OFFSET).copied()
  }

  /// [`None`] when the header is cut short or the format byte is unknown.
  pub fn format(&self) -> Option<CrnFormat> {
    self
      .data
      .get(FORMAT_OFFSET)
      .and_then(|&format| CrnFormat::from_u8(format))
  }

  /// The whole file is the payload, the decoder needs every table in it.
  pub fn texture(&self) -> Texture<'a> {
    Texture::new(
      CONTAINER,
      u32::from(self.header.width.get()),
      u32::from(self.header.height.get()),
      self.data,
      0..self.data.len(),
    )
  }
}
