use image::RgbaImage;

/// Byte order of the four channels of each decoded pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
  /// What block decoders produce, blue in the lowest byte.
  Bgra,
  Rgba,
}

/// Row-major pixels of a decoded texture, four bytes each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
  width: u32,
  height: u32,
  pixels: Vec<u8>,
  channel_order: ChannelOrder,
}

impl DecodedImage {
  pub(crate) fn new(width: u32, height: u32, pixels: Vec<u8>, channel_order: ChannelOrder) -> Self {
    debug_assert_eq!(pixels.len() as u64, u64::from(width) * u64::from(height) * 4);
    Self {
      width,
      height,
      pixels,
      channel_order,
    }
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn channel_order(&self) -> ChannelOrder {
    self.channel_order
  }

  pub fn pixels(&self) -> &[u8] {
    &self.pixels
  }

  pub fn into_pixels(self) -> Vec<u8> {
    self.pixels
  }

  /// Swaps blue and red so the image can be handed to RGBA consumers.
  pub fn into_rgba(mut self) -> Self {
    if self.channel_order == ChannelOrder::Bgra {
      for pixel in self.pixels.chunks_exact_mut(4) {
        pixel.swap(0, 2);
      }
      self.channel_order = ChannelOrder::Rgba;
    }
    self
  }

  /// The pixel at `x`, `y` as RGBA, whatever order the buffer is in.
  pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
    if x >= self.width || y >= self.height {
      return None;
    }

    let index = (y as usize * self.width as usize + x as usize) * 4;
    let [first, green, third, alpha]: [u8; 4] = self.pixels[index..index + 4].try_into().ok()?;
    Some(match self.channel_order {
      ChannelOrder::Bgra => [third, green, first, alpha],
      ChannelOrder::Rgba => [first, green, third, alpha],
    })
  }

  pub fn into_rgba_image(self) -> Option<RgbaImage> {
    let rgba = self.into_rgba();
    RgbaImage::from_raw(rgba.width, rgba.height, rgba.pixels)
  }
}
