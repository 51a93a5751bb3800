use snafu::{Backtrace, Snafu};

use crate::container::ContainerFormat;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
  #[snafu(display("expected {container} magic to be {expected:02X?}, got {actual:02X?}"))]
  InvalidMagic {
    container: ContainerFormat,
    expected: &'static [u8],
    actual: Vec<u8>,
    backtrace: Backtrace,
  },
  #[snafu(display(
    "the {container} header is out of bounds: needs 0x{required:X} bytes, file is 0x{available:X}"
  ))]
  HeaderOutOfBounds {
    container: ContainerFormat,
    required: usize,
    available: usize,
    backtrace: Backtrace,
  },
  #[snafu(display(
    "the {container} payload is out of bounds: starts at 0x{offset:X}, size is 0x{length:X}, file is 0x{available:X}"
  ))]
  TruncatedPayload {
    container: ContainerFormat,
    offset: u64,
    length: u64,
    available: usize,
    backtrace: Backtrace,
  },
  #[snafu(display("the {container} texture has no pixels: {width}x{height}"))]
  EmptyDimensions {
    container: ContainerFormat,
    width: u32,
    height: u32,
    backtrace: Backtrace,
  },
  #[snafu(display("ktx2 supercompression scheme {scheme} is not supported"))]
  UnsupportedSupercompression { scheme: u32, backtrace: Backtrace },
  #[snafu(display("unrecognized container extension {extension:?}, expected ktx2, dds or crn"))]
  UnrecognizedFormat {
    extension: String,
    backtrace: Backtrace,
  },
}
