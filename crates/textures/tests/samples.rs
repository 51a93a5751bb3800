mod common;

use tex2d_library::{OwnedTexture, parse};
use tex2d_textures::{
  ChannelOrder, DecodeError, decode,
  samples::{SAMPLE_CASES, find},
};

#[test]
fn every_sample_case_reaches_its_decoder() {
  for case in SAMPLE_CASES {
    let (data, payload) = common::sample_file(case, 16, 8);
    let texture = parse(&data, case.container).unwrap();

    let image = decode(&texture, |data, width, height| {
      assert_eq!(data, payload.as_slice(), "{}", case.name);
      assert_eq!((width, height), (16, 8));
      vec![0x80; 16 * 8 * 4]
    })
    .unwrap();

    assert_eq!((image.width(), image.height()), (16, 8), "{}", case.name);
    assert_eq!(image.channel_order(), ChannelOrder::Bgra);
  }
}

#[test]
fn owned_textures_decode_the_same_payload() {
  let case = find("BC7.ktx2").unwrap();
  let (data, payload) = common::sample_file(case, 8, 8);

  let owned = OwnedTexture::parse(data, case.container).unwrap();
  let image = decode(&owned, |data, _, _| {
    assert_eq!(data, payload.as_slice());
    vec![0; 8 * 8 * 4]
  })
  .unwrap();

  assert_eq!(image.pixels().len(), 256);
}

#[test]
fn short_decoder_output_is_an_error() {
  let case = find("ETC2_RGBA").unwrap();
  let (data, _) = common::sample_file(case, 16, 8);
  let texture = parse(&data, case.container).unwrap();

  let error = decode(&texture, |_, _, _| vec![0; 16 * 8 * 4 - 1]).unwrap_err();
  assert!(matches!(
    error,
    DecodeError::SizeMismatch {
      expected: 512,
      actual: 511,
      ..
    }
  ));
}
