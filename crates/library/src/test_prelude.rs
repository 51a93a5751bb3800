//! Synthetic containers written byte by byte at the offsets the formats document.
//!
//! Built for the unit tests and, behind the `test-util` feature, for downstream test suites.

/// A KTX2 file with a single level whose payload is written at `level_offset`.
///
/// The file is at least 96 bytes, the last field of the level index is only written when the
/// file reaches 104.
pub fn ktx2_file(width: u32, height: u32, level_offset: u64, payload: &[u8]) -> Vec<u8> {
  let level_offset = level_offset as usize;
  let mut data = vec![0u8; (level_offset + payload.len()).max(96)];

  data[..12].copy_from_slice(&[
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x32, 0x30, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
  ]);
  data[20..24].copy_from_slice(&width.to_le_bytes());
  data[24..28].copy_from_slice(&height.to_le_bytes());
  data[40..44].copy_from_slice(&1u32.to_le_bytes());
  data[80..88].copy_from_slice(&(level_offset as u64).to_le_bytes());
  data[88..96].copy_from_slice(&(payload.len() as u64).to_le_bytes());
  if let Some(uncompressed) = data.get_mut(96..104) {
    uncompressed.copy_from_slice(&(payload.len() as u64).to_le_bytes());
  }
  data[level_offset..level_offset + payload.len()].copy_from_slice(payload);

  data
}

/// A DDS file with the payload appended straight after the 128 byte header.
pub fn dds_file(header_size: u32, four_cc: [u8; 4], width: u32, height: u32, payload: &[u8]) -> Vec<u8> {
  let mut data = vec![0u8; 128];

  data[..4].copy_from_slice(b"DDS ");
  data[4..8].copy_from_slice(&header_size.to_le_bytes());
  data[12..16].copy_from_slice(&height.to_le_bytes());
  data[16..20].copy_from_slice(&width.to_le_bytes());
  data[28..32].copy_from_slice(&1u32.to_le_bytes());
  data[76..80].copy_from_slice(&32u32.to_le_bytes());
  data[80..84].copy_from_slice(&4u32.to_le_bytes());
  data[84..88].copy_from_slice(&four_cc);
  data.extend_from_slice(payload);

  data
}

/// A CRN file of `size` bytes, with a DXT1 single level header when it fits.
pub fn crn_file(width: u16, height: u16, size: usize) -> Vec<u8> {
  let mut data: Vec<u8> = (0..size.max(19)).map(|index| (index % 251) as u8).collect();

  data[..2].copy_from_slice(b"Hx");
  data[2..4].copy_from_slice(&19u16.to_be_bytes());
  data[12..14].copy_from_slice(&width.to_be_bytes());
  data[14..16].copy_from_slice(&height.to_be_bytes());
  data[16] = 1;
  data[17] = 1;
  data[18] = 0;
  data.truncate(size);

  data
}
