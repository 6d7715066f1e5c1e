use super::*;
use crate::lod::plan;

// =============================================================================
// Fixed tiling
// =============================================================================

/// Every level of a 129² field tiles into 17×17-vertex blocks.
#[test]
fn test_fixed_tiling_keeps_vertex_count_per_block() {
  let tiling = Tiling::Fixed { block_quad_size: 16 };
  let expected_blocks = [64, 16, 4];

  for (level, &expected) in plan(129, 129).iter().zip(&expected_blocks) {
    let windows = partition(level, tiling, 129, 129).unwrap();
    assert_eq!(windows.len(), expected, "LOD{}", level.index);
    for w in &windows {
      assert_eq!(w.vertex_count(), [17, 17], "LOD{} {}", level.index, w.name());
      assert_eq!(w.sampling, Sampling::Exact);
      assert!(w.validate().is_ok());
    }
  }
}

#[test]
fn test_fixed_tiling_windows_lod1() {
  let level = plan(129, 129)[1];
  let windows = partition(&level, Tiling::Fixed { block_quad_size: 16 }, 129, 129).unwrap();

  // Row-major with by outer
  assert_eq!(windows[0].coord, [0, 0]);
  assert_eq!(windows[1].coord, [1, 0]);
  assert_eq!(windows[4].coord, [0, 1]);

  let w = windows[5]; // Block<1,1>
  assert_eq!(w.pixel_min, [32, 32]);
  assert_eq!(w.pixel_max, [64, 64]);
  assert_eq!(w.step, [2, 2]);
}

/// Neighbouring blocks share their boundary pixel.
#[test]
fn test_fixed_tiling_shares_seams_and_covers_field() {
  let level = plan(257, 257)[0];
  let windows = partition(&level, Tiling::Fixed { block_quad_size: 32 }, 257, 257).unwrap();
  let per_row = 256 / 32;

  for w in &windows {
    if w.coord[0] + 1 < per_row {
      let right = windows[(w.coord[1] * per_row + w.coord[0] + 1) as usize];
      assert_eq!(w.pixel_max[0], right.pixel_min[0]);
    }
  }

  let last = windows.last().unwrap();
  assert_eq!(last.pixel_max, [256, 256], "Last block reaches the field edge");
}

#[test]
fn test_fixed_tiling_non_square() {
  let levels = plan(65, 129);
  let windows = partition(&levels[0], Tiling::Fixed { block_quad_size: 16 }, 65, 129).unwrap();
  // 64/16 × 128/16
  assert_eq!(windows.len(), 4 * 8);
  assert_eq!(windows.last().unwrap().pixel_max, [64, 128]);
}

/// Quad counts not divisible by the block size are rejected, not truncated.
#[test]
fn test_fixed_tiling_rejects_non_divisible_block_size() {
  let level = plan(129, 129)[0];
  match partition(&level, Tiling::Fixed { block_quad_size: 48 }, 129, 129) {
    Err(GeoMipMapError::InvalidWindow(msg)) => {
      assert!(msg.contains("128x128"), "message = {}", msg);
      assert!(msg.contains("48"), "message = {}", msg);
    }
    other => panic!("Expected InvalidWindow, got {:?}", other),
  }
}

/// A block larger than the level cannot tile it.
#[test]
fn test_fixed_tiling_rejects_oversized_block() {
  let level = plan(129, 129)[2]; // 32 quads
  let result = partition(&level, Tiling::Fixed { block_quad_size: 64 }, 129, 129);
  assert!(matches!(result, Err(GeoMipMapError::InvalidWindow(_))));
}

#[test]
fn test_fixed_tiling_rejects_zero_block_size() {
  let level = plan(33, 33)[0];
  let result = partition(&level, Tiling::Fixed { block_quad_size: 0 }, 33, 33);
  assert!(matches!(result, Err(GeoMipMapError::InvalidWindow(_))));
}

// =============================================================================
// Untiled
// =============================================================================

#[test]
fn test_untiled_single_bilinear_block() {
  for level in plan(129, 129) {
    let windows = partition(&level, Tiling::None, 129, 129).unwrap();
    assert_eq!(windows.len(), 1);

    let w = windows[0];
    assert_eq!(w.coord, [0, 0]);
    assert_eq!(w.pixel_min, [0, 0]);
    assert_eq!(w.pixel_max, [128, 128]);
    assert_eq!(w.sampling, Sampling::Bilinear);
    assert_eq!(w.vertex_count(), level.vertex_count());
  }
}

// =============================================================================
// BlockWindow
// =============================================================================

#[test]
fn test_window_validate_zero_step() {
  let w = BlockWindow::new([0, 0], [0, 0], [16, 16], [0, 1], Sampling::Exact);
  assert!(matches!(w.validate(), Err(GeoMipMapError::InvalidWindow(_))));
}

#[test]
fn test_window_validate_empty() {
  let w = BlockWindow::new([0, 0], [8, 0], [8, 16], [1, 1], Sampling::Exact);
  assert!(matches!(w.validate(), Err(GeoMipMapError::InvalidWindow(_))));
}

#[test]
fn test_window_exact_requires_divisible_stride() {
  let exact = BlockWindow::new([0, 0], [0, 0], [10, 10], [4, 4], Sampling::Exact);
  assert!(matches!(exact.validate(), Err(GeoMipMapError::InvalidWindow(_))));

  // Bilinear closes the partial stride with the boundary sample
  let bilinear = BlockWindow { sampling: Sampling::Bilinear, ..exact };
  assert!(bilinear.validate().is_ok());
  // 0, 4, 8, 10
  assert_eq!(bilinear.vertex_count(), [4, 4]);
}

#[test]
fn test_window_name() {
  let w = BlockWindow::new([3, 1], [0, 0], [1, 1], [1, 1], Sampling::Exact);
  assert_eq!(w.name(), "Block<3,1>");
}
