//! Block partitioning of one LOD level.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Tiling::Fixed { block_quad_size: 16 }, 129×129 field                    │
//! │                                                                         │
//! │   LOD0: 128 quads, step 1  → 8×8 blocks, 16 px span, 17×17 vertices     │
//! │   LOD1:  64 quads, step 2  → 4×4 blocks, 32 px span, 17×17 vertices     │
//! │   LOD2:  32 quads, step 4  → 2×2 blocks, 64 px span, 17×17 vertices     │
//! │                                                                         │
//! │   Block<bx,by>:  pixel_min = (bx, by) * span                            │
//! │                  pixel_max = pixel_min + span                           │
//! │                                                                         │
//! │   Neighbouring blocks share their boundary pixel row/column; the seam   │
//! │   vertices are duplicated, not merged.                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │ Tiling::None                                                            │
//! │                                                                         │
//! │   One block [0, W-1]×[0, H-1], step = (W-1)/quad_count, sampled         │
//! │   bilinearly → quad_count + 1 vertices per axis.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{GeoMipMapError, Result};
use crate::lod::LodLevel;
use crate::types::Tiling;

/// How a block reads heights from the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sampling {
  /// Exact pixel reads; the stride must divide the window span.
  Exact,

  /// Bilinear reads at normalized coordinates; a trailing partial stride is
  /// closed with the boundary sample.
  Bilinear,
}

/// Pixel-space sampling window of one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockWindow {
  /// Block grid coordinates `(bx, by)` within its level.
  pub coord: [u32; 2],

  /// First sampled pixel (inclusive).
  pub pixel_min: [u32; 2],

  /// Last sampled pixel (inclusive).
  pub pixel_max: [u32; 2],

  /// Pixel stride per quad edge.
  pub step: [u32; 2],

  pub sampling: Sampling,
}

impl BlockWindow {
  pub fn new(
    coord: [u32; 2],
    pixel_min: [u32; 2],
    pixel_max: [u32; 2],
    step: [u32; 2],
    sampling: Sampling,
  ) -> Self {
    Self {
      coord,
      pixel_min,
      pixel_max,
      step,
      sampling,
    }
  }

  /// Pixel extent per axis (`pixel_max - pixel_min`).
  #[inline]
  pub fn span(&self) -> [u32; 2] {
    [
      self.pixel_max[0].saturating_sub(self.pixel_min[0]),
      self.pixel_max[1].saturating_sub(self.pixel_min[1]),
    ]
  }

  /// Vertices per axis, including a closing boundary sample when the stride
  /// does not land on `pixel_max`.
  #[inline]
  pub fn vertex_count(&self) -> [u32; 2] {
    let span = self.span();
    [
      span[0].div_ceil(self.step[0].max(1)) + 1,
      span[1].div_ceil(self.step[1].max(1)) + 1,
    ]
  }

  /// Check stride and extent before any sampling happens.
  pub fn validate(&self) -> Result<()> {
    if self.step[0] == 0 || self.step[1] == 0 {
      return Err(GeoMipMapError::InvalidWindow(format!(
        "{} has zero stride {:?}",
        self.name(),
        self.step
      )));
    }
    if self.pixel_min[0] >= self.pixel_max[0] || self.pixel_min[1] >= self.pixel_max[1] {
      return Err(GeoMipMapError::InvalidWindow(format!(
        "{} window {:?}..={:?} is empty",
        self.name(),
        self.pixel_min,
        self.pixel_max
      )));
    }
    if self.sampling == Sampling::Exact {
      let span = self.span();
      if span[0] % self.step[0] != 0 || span[1] % self.step[1] != 0 {
        return Err(GeoMipMapError::InvalidWindow(format!(
          "{} stride {:?} does not divide span {:?}",
          self.name(),
          self.step,
          span
        )));
      }
    }
    Ok(())
  }

  /// Display name, e.g. `Block<3,1>`.
  pub fn name(&self) -> String {
    format!("Block<{},{}>", self.coord[0], self.coord[1])
  }
}

/// Split one LOD level into block windows, row by row (`by` outer).
pub fn partition(
  level: &LodLevel,
  tiling: Tiling,
  width: u32,
  height: u32,
) -> Result<Vec<BlockWindow>> {
  let step = level.pixel_step(width, height);

  let windows = match tiling {
    Tiling::None => vec![BlockWindow::new(
      [0, 0],
      [0, 0],
      [width - 1, height - 1],
      step,
      Sampling::Bilinear,
    )],
    Tiling::Fixed { block_quad_size } => {
      let [qx, qy] = level.quad_count;
      if block_quad_size == 0 {
        return Err(GeoMipMapError::InvalidWindow(
          "block quad size must be positive".to_string(),
        ));
      }
      if qx % block_quad_size != 0 || qy % block_quad_size != 0 {
        return Err(GeoMipMapError::InvalidWindow(format!(
          "LOD{} quad count {}x{} is not divisible by block quad size {}",
          level.index, qx, qy, block_quad_size
        )));
      }

      let blocks = [qx / block_quad_size, qy / block_quad_size];
      let span = [block_quad_size * step[0], block_quad_size * step[1]];

      let mut windows = Vec::with_capacity((blocks[0] * blocks[1]) as usize);
      for by in 0..blocks[1] {
        for bx in 0..blocks[0] {
          let pixel_min = [bx * span[0], by * span[1]];
          let pixel_max = [pixel_min[0] + span[0], pixel_min[1] + span[1]];
          windows.push(BlockWindow::new(
            [bx, by],
            pixel_min,
            pixel_max,
            step,
            Sampling::Exact,
          ));
        }
      }
      windows
    }
  };

  for window in &windows {
    tracing::debug!(
      "LOD{} {}: from {:?} to {:?} step {:?} on the height map",
      level.index,
      window.name(),
      window.pixel_min,
      window.pixel_max,
      window.step
    );
  }

  Ok(windows)
}

#[cfg(test)]
#[path = "partition_test.rs"]
mod partition_test;
