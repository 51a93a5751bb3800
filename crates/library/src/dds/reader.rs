use std::ops::Range;

use num_traits::FromPrimitive;
use snafu::{OptionExt, ensure};
use tracing::{debug, warn};
use zerocopy::FromBytes;

use crate::{
  container::ContainerFormat,
  dds::types::{DdsHeader, FourCc, MAGIC, four_cc_name},
  error::{
    EmptyDimensionsSnafu, HeaderOutOfBoundsSnafu, InvalidMagicSnafu, ParseError,
    TruncatedPayloadSnafu,
  },
  texture::Texture,
  util::checked_range,
};

const CONTAINER: ContainerFormat = ContainerFormat::Dds;

/// The header's `size` field does not count the magic in front of it.
const MAGIC_SIZE: u64 = 4;

/// Bytes per 4x4 block for a fourCC.
///
/// Only `DXT1` is known to use 8 byte blocks. Every other value, recognized or not, is read
/// as 16 bytes per block.
pub fn block_byte_size(four_cc: u32) -> u32 {
  if four_cc == FourCc::Dxt1 as u32 { 8 } else { 16 }
}

pub struct DdsReader<'a> {
  data: &'a [u8],
  header: &'a DdsHeader,
  payload: Range<usize>,
}

impl<'a> DdsReader<'a> {
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

    let (header, _) = DdsHeader::ref_from_prefix(data)
      .ok()
      .context(HeaderOutOfBoundsSnafu {
        container: CONTAINER,
        required: size_of::<DdsHeader>(),
        available: data.len(),
      })?;

    let width = header.width.get();
    let height = header.height.get();
    ensure!(
      width > 0 && height > 0,
      EmptyDimensionsSnafu {
        container: CONTAINER,
        width,
        height
      }
    );

    let four_cc = header.pixel_format.four_cc.get();
    match FourCc::from_u32(four_cc) {
      Some(FourCc::Dx10) => warn!("the dx10 extension header is read as part of the dds payload"),
      Some(_) => {}
      None => warn!(
        four_cc = %four_cc_name(four_cc),
        "unrecognized dds fourcc, assuming 16 byte blocks"
      ),
    }
    if !header.pixel_format.flags.four_cc() {
      debug!("dds pixel format does not set the fourcc flag");
    }

    let block_size = block_byte_size(four_cc);
    let offset = u64::from(header.size.get()) + MAGIC_SIZE;
    // at most (2^32 - 1)^2, which still fits in a u64
    let length = (u128::from(width) * u128::from(height) * u128::from(block_size) / 16) as u64;
    let payload = checked_range(offset, length, data.len()).context(TruncatedPayloadSnafu {
      container: CONTAINER,
      offset,
      length,
      available: data.len(),
    })?;

    debug!(
      width,
      height,
      four_cc = %four_cc_name(four_cc),
      block_size,
      ?payload,
      "read dds header"
    );

    Ok(Self {
      data,
      header,
      payload,
    })
  }

  pub fn header(&self) -> &'a DdsHeader {
    self.header
  }

  /// The fourCC by name, [`None`] when it is not one this crate knows.
  pub fn four_cc(&self) -> Option<FourCc> {
    FourCc::from_u32(self.header.pixel_format.four_cc.get())
  }

  pub fn block_byte_size(&self) -> u32 {
    block_byte_size(self.header.pixel_format.four_cc.get())
  }

  pub fn texture(&self) -> Texture<'a> {
    Texture::new(
      CONTAINER,
      self.header.width.get(),
      self.header.height.get(),
      self.data,
      self.payload.clone(),
    )
  }
}
