//! LOD level planning.
//!
//! # LOD Convention
//!
//! LOD 0 = finest detail (full resolution), higher LOD = coarser.
//!
//! ```text
//! Quad Count = (resolution - 1) / 2^LOD
//! Pixel Step = 2^LOD
//! ```
//!
//! Planning stops before the first level whose quad count on either axis is
//! at or below `MIN_LEVEL_QUAD_COUNT` (16):
//!
//! ```text
//!   129×129:  LOD0 = 128   LOD1 = 64   LOD2 = 32   (16 → stop)
//!   65×129:   LOD0 = 64×128   LOD1 = 32×64   (16×32 → stop)
//! ```
//!
//! Every coarser level is an exact 2:1 subset of the previous one, which is
//! what lets a renderer blend or stitch neighbouring levels.

use smallvec::SmallVec;

use crate::constants::{MAX_LEVEL_COUNT, MIN_LEVEL_QUAD_COUNT};

/// One level of the GeoMipMap hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LodLevel {
  /// Level index (0 = finest).
  pub index: usize,

  /// Quads per axis at this level.
  pub quad_count: [u32; 2],
}

impl LodLevel {
  pub fn new(index: usize, quad_count: [u32; 2]) -> Self {
    Self { index, quad_count }
  }

  /// Vertices per axis when the whole level is one grid.
  #[inline]
  pub fn vertex_count(&self) -> [u32; 2] {
    [self.quad_count[0] + 1, self.quad_count[1] + 1]
  }

  /// Pixel stride per quad edge for a field of the given resolution.
  ///
  /// step = (resolution - 1) / quad_count
  #[inline]
  pub fn pixel_step(&self, width: u32, height: u32) -> [u32; 2] {
    [
      (width - 1) / self.quad_count[0].max(1),
      (height - 1) / self.quad_count[1].max(1),
    ]
  }

  /// Display name, e.g. `Landscape_LOD0`.
  pub fn name(&self) -> String {
    format!("Landscape_LOD{}", self.index)
  }
}

/// Planned levels, finest first.
pub type LodPlan = SmallVec<[LodLevel; MAX_LEVEL_COUNT]>;

/// Derive every LOD level for a `width × height` field.
///
/// Assumes the resolution has been validated; for a valid resolution at least
/// one level is always produced.
pub fn plan(width: u32, height: u32) -> LodPlan {
  let mut levels = LodPlan::new();
  let mut quads = [width.saturating_sub(1), height.saturating_sub(1)];

  while quads[0] > MIN_LEVEL_QUAD_COUNT && quads[1] > MIN_LEVEL_QUAD_COUNT {
    levels.push(LodLevel::new(levels.len(), quads));
    quads = [quads[0] / 2, quads[1] / 2];
  }

  levels
}

/// Like [`plan`], keeping at most `max_levels` levels (minimum one).
pub fn plan_with_limit(width: u32, height: u32, max_levels: Option<usize>) -> LodPlan {
  let mut levels = plan(width, height);
  if let Some(max) = max_levels {
    levels.truncate(max.max(1));
  }
  levels
}

#[cfg(test)]
#[path = "lod_test.rs"]
mod lod_test;
