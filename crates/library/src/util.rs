use std::ops::Range;

/// `offset..offset + length` if the whole range fits in `available` bytes.
pub(crate) fn checked_range(offset: u64, length: u64, available: usize) -> Option<Range<usize>> {
  let end = offset.checked_add(length)?;
  let start = usize::try_from(offset).ok()?;
  let end = usize::try_from(end).ok()?;

  (end <= available).then_some(start..end)
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::checked_range;

  #[rstest]
  #[case(0, 0, 0, Some(0..0))]
  #[case(100, 8, 108, Some(100..108))]
  #[case(100, 8, 107, None)]
  #[case(108, 0, 108, Some(108..108))]
  #[case(109, 0, 108, None)]
  #[case(u64::MAX, 1, usize::MAX, None)]
  #[case(1, u64::MAX, usize::MAX, None)]
  fn ranges_stay_inside_the_buffer(
    #[case] offset: u64,
    #[case] length: u64,
    #[case] available: usize,
    #[case] expected: Option<std::ops::Range<usize>>,
  ) {
    assert_eq!(checked_range(offset, length, available), expected);
  }
}
