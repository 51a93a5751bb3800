use tex2d_library::{
  ContainerFormat,
  test_prelude::{crn_file, dds_file, ktx2_file},
};
use tex2d_textures::{Codec, samples::SampleCase};

fn atc_four_cc(case: &SampleCase) -> [u8; 4] {
  match case.codec {
    Codec::ATC_RGB4 => *b"ATC ",
    _ if case.name.ends_with("Explicit") => *b"ATCA",
    _ => *b"ATCI",
  }
}

/// A container shaped like the sample file for `case`, and the payload a decoder should see.
pub fn sample_file(case: &SampleCase, width: u32, height: u32) -> (Vec<u8>, Vec<u8>) {
  match case.container {
    ContainerFormat::Ktx2 => {
      let length = case.codec.compressed_size(width, height).unwrap();
      let payload: Vec<u8> = (0..length).map(|index| index as u8).collect();
      (ktx2_file(width, height, 104, &payload), payload)
    }
    ContainerFormat::Dds => {
      // every fourCC but DXT1 is read as 16 byte blocks
      let length = (width * height) as usize;
      let payload: Vec<u8> = (0..length).map(|index| (index % 251) as u8).collect();
      (dds_file(124, atc_four_cc(case), width, height, &payload), payload)
    }
    ContainerFormat::Crn => {
      let data = crn_file(width as u16, height as u16, 256);
      (data.clone(), data)
    }
  }
}
