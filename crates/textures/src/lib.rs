//! Hands the payload of a [`Texture`] to a block decoder and collects the pixels it returns.
//!
//! Decoders are supplied by the caller, either as a closure for a single call to [`decode`] or
//! registered per [`Codec`] in a [`DecoderRegistry`].
pub mod decode;
pub mod formats;
pub mod pixels;
pub mod samples;

pub use decode::{BlockDecodeFn, DecodeError, DecoderRegistry, decode, decode_with};
pub use formats::Codec;
pub use pixels::{ChannelOrder, DecodedImage};
use tex2d_library::{OwnedTexture, Texture};

/// A compressed texture a decoder can read from.
pub trait TextureReader {
  fn width(&self) -> u32;
  fn height(&self) -> u32;

  fn compressed_data(&self) -> &[u8];
}

impl TextureReader for Texture<'_> {
  fn width(&self) -> u32 {
    self.width
  }
  fn height(&self) -> u32 {
    self.height
  }

  fn compressed_data(&self) -> &[u8] {
    self.payload()
  }
}

impl TextureReader for OwnedTexture {
  fn width(&self) -> u32 {
    self.texture().width
  }
  fn height(&self) -> u32 {
    self.texture().height
  }

  fn compressed_data(&self) -> &[u8] {
    self.texture().payload()
  }
}
