use std::{collections::HashMap, fmt};

use snafu::{Backtrace, OptionExt, Snafu, ensure};
use tracing::debug;

use crate::{
  TextureReader,
  formats::Codec,
  pixels::{ChannelOrder, DecodedImage},
};

/// A block decoder that writes one pixel per `u32`, blue in the lowest byte.
///
/// Arguments are the compressed data, the width and height in pixels, and the output buffer
/// of `width * height` pixels.
pub type BlockDecodeFn = fn(&[u8], usize, usize, &mut [u32]) -> Result<(), &'static str>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DecodeError {
  #[snafu(display(
    "decoder returned {actual} bytes for a {width}x{height} texture, expected {expected}"
  ))]
  SizeMismatch {
    width: u32,
    height: u32,
    expected: usize,
    actual: usize,
    backtrace: Backtrace,
  },
  #[snafu(display("a {width}x{height} texture is too large to decode"))]
  DimensionsTooLarge {
    width: u32,
    height: u32,
    backtrace: Backtrace,
  },
  #[snafu(display("decoder failed: {message}"))]
  Codec {
    message: &'static str,
    backtrace: Backtrace,
  },
  #[snafu(display("no decoder is registered for {codec}"))]
  UnregisteredCodec { codec: Codec, backtrace: Backtrace },
}

fn pixel_count(width: u32, height: u32) -> Result<usize, DecodeError> {
  (width as usize)
    .checked_mul(height as usize)
    .filter(|count| count.checked_mul(4).is_some())
    .context(DimensionsTooLargeSnafu { width, height })
}

/// Runs `decode_fn` once over the payload of `texture`.
///
/// `decode_fn` gets the compressed bytes, the width and the height, and must return exactly
/// `width * height * 4` bytes of BGRA pixels.
pub fn decode<T, F>(texture: &T, decode_fn: F) -> Result<DecodedImage, DecodeError>
where
  T: TextureReader + ?Sized,
  F: FnOnce(&[u8], u32, u32) -> Vec<u8>,
{
  let width = texture.width();
  let height = texture.height();
  let expected = pixel_count(width, height)? * 4;

  let pixels = decode_fn(texture.compressed_data(), width, height);
  ensure!(
    pixels.len() == expected,
    SizeMismatchSnafu {
      width,
      height,
      expected,
      actual: pixels.len(),
    }
  );

  debug!(width, height, compressed = texture.compressed_data().len(), "decoded texture");
  Ok(DecodedImage::new(width, height, pixels, ChannelOrder::Bgra))
}

/// Like [`decode`], for decoders that fill a buffer of `u32` pixels.
pub fn decode_with<T>(texture: &T, decode_fn: BlockDecodeFn) -> Result<DecodedImage, DecodeError>
where
  T: TextureReader + ?Sized,
{
  let width = texture.width();
  let height = texture.height();
  let mut buffer = vec![0u32; pixel_count(width, height)?];

  if let Err(message) = decode_fn(
    texture.compressed_data(),
    width as usize,
    height as usize,
    &mut buffer,
  ) {
    return CodecSnafu { message }.fail();
  }

  decode(texture, |_, _, _| {
    buffer.iter().flat_map(|pixel| pixel.to_le_bytes()).collect()
  })
}

/// Block decoders keyed by the codec they handle.
#[derive(Clone, Default)]
pub struct DecoderRegistry {
  decoders: HashMap<Codec, BlockDecodeFn>,
}

impl DecoderRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the decoder previously registered for `codec`, if any.
  pub fn register(&mut self, codec: Codec, decode_fn: BlockDecodeFn) -> Option<BlockDecodeFn> {
    self.decoders.insert(codec, decode_fn)
  }

  pub fn with(mut self, codec: Codec, decode_fn: BlockDecodeFn) -> Self {
    self.register(codec, decode_fn);
    self
  }

  pub fn get(&self, codec: Codec) -> Option<BlockDecodeFn> {
    self.decoders.get(&codec).copied()
  }

  pub fn get_by_name(&self, name: &str) -> Option<(Codec, BlockDecodeFn)> {
    let codec = Codec::from_name(name)?;
    self.get(codec).map(|decode_fn| (codec, decode_fn))
  }

  pub fn codecs(&self) -> impl Iterator<Item = Codec> + '_ {
    self.decoders.keys().copied()
  }

  pub fn decode<T>(&self, texture: &T, codec: Codec) -> Result<DecodedImage, DecodeError>
  where
    T: TextureReader + ?Sized,
  {
    let decode_fn = self.get(codec).context(UnregisteredCodecSnafu { codec })?;
    debug!(%codec, "decoding with registered decoder");
    decode_with(texture, decode_fn)
  }
}

impl fmt::Debug for DecoderRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.decoders.keys()).finish()
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  struct Raw {
    width: u32,
    height: u32,
    data: Vec<u8>,
  }

  impl TextureReader for Raw {
    fn width(&self) -> u32 {
      self.width
    }
    fn height(&self) -> u32 {
      self.height
    }

    fn compressed_data(&self) -> &[u8] {
      &self.data
    }
  }

  fn raw(width: u32, height: u32) -> Raw {
    Raw {
      width,
      height,
      data: (0..16).collect(),
    }
  }

  const BLUE: u32 = u32::from_le_bytes([0xFF, 0x00, 0x00, 0xFF]);

  fn fill_blue(
    data: &[u8],
    width: usize,
    height: usize,
    image: &mut [u32],
  ) -> Result<(), &'static str> {
    if data.is_empty() || image.len() != width * height {
      return Err("bad arguments");
    }
    image.fill(BLUE);
    Ok(())
  }

  fn fail(_: &[u8], _: usize, _: usize, _: &mut [u32]) -> Result<(), &'static str> {
    Err("corrupt block")
  }

  #[test]
  fn decoder_runs_once_with_the_payload() {
    let texture = raw(4, 2);
    let mut calls = 0;

    let image = decode(&texture, |data, width, height| {
      calls += 1;
      assert_eq!(data, texture.data.as_slice());
      assert_eq!((width, height), (4, 2));
      vec![7; 32]
    })
    .unwrap();

    assert_eq!(calls, 1);
    assert_eq!((image.width(), image.height()), (4, 2));
    assert_eq!(image.channel_order(), ChannelOrder::Bgra);
    assert_eq!(image.pixels(), &[7; 32]);
  }

  #[rstest]
  #[case(0)]
  #[case(63)]
  #[case(65)]
  #[case(16)]
  fn wrong_output_sizes_are_rejected(#[case] returned: usize) {
    let error = decode(&raw(4, 4), |_, _, _| vec![0; returned]).unwrap_err();

    assert!(matches!(
      error,
      DecodeError::SizeMismatch { expected: 64, actual, .. } if actual == returned
    ));
  }

  #[test]
  fn block_decoders_write_bgra() {
    let image = decode_with(&raw(3, 2), fill_blue).unwrap();

    assert_eq!(image.pixels().len(), 24);
    assert!(image.pixels().chunks(4).all(|pixel| pixel == [0xFF, 0x00, 0x00, 0xFF]));
    assert_eq!(image.pixel(2, 1), Some([0x00, 0x00, 0xFF, 0xFF]));
    assert_eq!(image.into_rgba().pixels()[..4], [0x00, 0x00, 0xFF, 0xFF]);
  }

  #[test]
  fn decoder_failures_are_reported() {
    let error = decode_with(&raw(4, 4), fail).unwrap_err();
    assert!(matches!(error, DecodeError::Codec { message: "corrupt block", .. }));
  }

  #[test]
  fn registry_dispatches_by_codec() {
    let mut registry = DecoderRegistry::new().with(Codec::BC1, fill_blue);
    assert!(registry.register(Codec::BC7, fail).is_none());
    assert!(registry.register(Codec::BC7, fill_blue).is_some());

    let image = registry.decode(&raw(4, 4), Codec::BC7).unwrap();
    assert_eq!(image.pixels().len(), 64);

    let (codec, _) = registry.get_by_name("bc1").unwrap();
    assert_eq!(codec, Codec::BC1);
    assert!(registry.get_by_name("ETC1").is_none());

    let mut codecs: Vec<_> = registry.codecs().map(Codec::name).collect();
    codecs.sort();
    assert_eq!(codecs, ["BC1", "BC7"]);
  }

  #[test]
  fn unregistered_codecs_are_rejected() {
    let error = DecoderRegistry::new()
      .decode(&raw(4, 4), Codec::ASTC_6x6)
      .unwrap_err();

    assert!(matches!(
      error,
      DecodeError::UnregisteredCodec {
        codec: Codec::ASTC_6x6,
        ..
      }
    ));
  }

  #[test]
  fn results_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DecoderRegistry>();
    assert_send_sync::<DecodedImage>();
    assert_send_sync::<DecodeError>();
  }
}
