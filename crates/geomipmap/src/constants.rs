//! Resolution and block-layout constants for GeoMipMap landscapes.
//!
//! # Height Field Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       HEIGHT FIELD LAYOUT (W = 2^k + 1)                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Pixel index:   0     1     2    ...   W-3   W-2   W-1                  │
//! │                 │     │                             │                   │
//! │                 └─────┴──── 2^k quads per axis ─────┘                   │
//! │                                                                         │
//! │  LOD 0:  2^k quads, stride 1                                            │
//! │  LOD 1:  2^(k-1) quads, stride 2                                        │
//! │  LOD i:  2^(k-i) quads, stride 2^i   (while quads > 16 on both axes)    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! Row-major, X innermost:
//!
//! index = py * W + px
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y (height)
//!          │
//!          │
//!          └───────── +X (pixel x)
//!         /
//!        /
//!       +Z (pixel y)
//! ```

/// Smallest accepted sample count per axis (2^5 + 1).
pub const MIN_RESOLUTION: u32 = 33;

/// Largest accepted sample count per axis (2^12 + 1).
pub const MAX_RESOLUTION: u32 = 4097;

/// Planning stops before a level whose quad count on either axis is at or
/// below this value.
pub const MIN_LEVEL_QUAD_COUNT: u32 = 16;

/// Default number of quads per block edge in tiled mode.
pub const DEFAULT_BLOCK_QUAD_SIZE: u32 = 16;

/// Upper bound on planned levels (4096 → 32 quads).
pub const MAX_LEVEL_COUNT: usize = 8;

/// Convert 2D pixel coordinates to a row-major sample index.
#[inline(always)]
pub const fn pixel_to_index(px: u32, py: u32, width: u32) -> usize {
  py as usize * width as usize + px as usize
}

/// Convert a row-major sample index back to pixel coordinates.
#[inline(always)]
pub const fn index_to_pixel(idx: usize, width: u32) -> (u32, u32) {
  let w = width as usize;
  ((idx % w) as u32, (idx / w) as u32)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
