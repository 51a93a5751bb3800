use ouroboros::self_referencing;

use crate::{
  container::{ContainerFormat, parse},
  error::ParseError,
  texture::Texture,
};

/// A [`Texture`] that keeps the file it was read from alive.
#[self_referencing]
pub struct OwnedTexture {
  data: Vec<u8>,
  #[borrows(data)]
  #[covariant]
  texture: Texture<'this>,
}

impl OwnedTexture {
  pub fn parse(data: Vec<u8>, format: ContainerFormat) -> Result<Self, ParseError> {
    OwnedTexture::try_new(data, |data| parse(data, format))
  }

  pub fn texture(&self) -> &Texture<'_> {
    self.borrow_texture()
  }

  pub fn into_data(self) -> Vec<u8> {
    self.into_heads().data
  }
}
