use super::*;

#[test]
fn test_pixel_index_roundtrip() {
  let width = 129;
  for &(px, py) in &[(0, 0), (128, 0), (0, 128), (64, 37), (128, 128)] {
    let idx = pixel_to_index(px, py, width);
    assert_eq!(index_to_pixel(idx, width), (px, py));
  }
}

#[test]
fn test_row_major_layout() {
  // X is innermost
  assert_eq!(pixel_to_index(1, 0, 33), 1);
  assert_eq!(pixel_to_index(0, 1, 33), 33);
  assert_eq!(pixel_to_index(32, 32, 33), 33 * 33 - 1);
}

#[test]
fn test_resolution_bounds_are_power_of_two_plus_one() {
  assert!((MIN_RESOLUTION - 1).is_power_of_two());
  assert!((MAX_RESOLUTION - 1).is_power_of_two());
}

#[test]
fn test_max_level_count_matches_max_resolution() {
  // 4096, 2048, ..., 32 → 8 levels
  let mut quads = MAX_RESOLUTION - 1;
  let mut levels = 0;
  while quads > MIN_LEVEL_QUAD_COUNT {
    levels += 1;
    quads /= 2;
  }
  assert_eq!(levels, MAX_LEVEL_COUNT);
}
