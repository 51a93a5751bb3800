use std::ops::Range;

use num_traits::FromPrimitive;
use snafu::{OptionExt, ensure};
use tracing::{debug, warn};
use zerocopy::{FromBytes, little_endian::U64};

use crate::{
  container::ContainerFormat,
  error::{
    EmptyDimensionsSnafu, HeaderOutOfBoundsSnafu, InvalidMagicSnafu, ParseError,
    TruncatedPayloadSnafu, UnsupportedSupercompressionSnafu,
  },
  ktx2::types::{Ktx2Header, LevelZero, MAGIC, SupercompressionScheme},
  texture::Texture,
  util::checked_range,
};

const CONTAINER: ContainerFormat = ContainerFormat::Ktx2;

pub struct Ktx2Reader<'a> {
  data: &'a [u8],
  header: &'a Ktx2Header,
  level_zero: &'a LevelZero,
  payload: Range<usize>,
}

impl<'a> Ktx2Reader<'a> {
  pub fn new(data: &'a [u8]) -> Result<Self, ParseError> {
    let magic = data.get(..MAGIC.len());
    ensure!(
      magic == Some(MAGIC.as_slice()),
      InvalidMagicSnafu {
        container: CONTAINER,
        expected: MAGIC.as_slice(),
        actual: magic.unwrap_or(data),
      }
    );

    let required = size_of::<Ktx2Header>() + size_of::<LevelZero>();
    let (header, level_zero) = Ktx2Header::ref_from_prefix(data)
      .ok()
      .and_then(|(header, rest)| {
        LevelZero::ref_from_prefix(rest)
          .ok()
          .map(|(level_zero, _)| (header, level_zero))
      })
      .context(HeaderOutOfBoundsSnafu {
        container: CONTAINER,
        required,
        available: data.len(),
      })?;

    let scheme = header.supercompression_scheme.get();
    ensure!(
      SupercompressionScheme::from_u32(scheme) == Some(SupercompressionScheme::Disabled),
      UnsupportedSupercompressionSnafu { scheme }
    );

    let width = header.pixel_width.get();
    let height = header.pixel_height.get();
    ensure!(
      width > 0 && height > 0,
      EmptyDimensionsSnafu {
        container: CONTAINER,
        width,
        height
      }
    );

    let offset = level_zero.byte_offset.get();
    let length = level_zero.byte_length.get();
    let payload = checked_range(offset, length, data.len()).context(TruncatedPayloadSnafu {
      container: CONTAINER,
      offset,
      length,
      available: data.len(),
    })?;

    if header.layer_count.get() > 1 || header.face_count.get() > 1 {
      warn!(
        layers = header.layer_count.get(),
        faces = header.face_count.get(),
        "level 0 of a ktx2 array or cubemap holds every layer and face"
      );
    }
    debug!(
      width,
      height,
      vk_format = header.vk_format.get(),
      ?payload,
      "read ktx2 header"
    );

    Ok(Self {
      data,
      header,
      level_zero,
      payload,
    })
  }

  pub fn header(&self) -> &'a Ktx2Header {
    self.header
  }

  pub fn level_zero(&self) -> &'a LevelZero {
    self.level_zero
  }

  /// [`None`] when the file ends before the last field of the level 0 entry.
  pub fn uncompressed_byte_length(&self) -> Option<u64> {
    let offset = size_of::<Ktx2Header>() + size_of::<LevelZero>();
    let (value, _) = U64::read_from_prefix(self.data.get(offset..)?).ok()?;
    Some(value.get())
  }

  /// The `VkFormat` of the payload, `0` (`VK_FORMAT_UNDEFINED`) when the data format
  /// descriptor is the only description of it.
  pub fn vk_format(&self) -> u32 {
    self.header.vk_format.get()
  }

  pub fn texture(&self) -> Texture<'a> {
    Texture::new(
      CONTAINER,
      self.header.pixel_width.get(),
      self.header.pixel_height.get(),
      self.data,
      self.payload.clone(),
    )
  }
}
