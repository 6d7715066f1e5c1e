//! Test utilities.
//!
//! Fixture height fields and mock sources shared by the module tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{GeoMipMapError, Result};
use crate::height_field::{HeightField, HeightSource};

// =============================================================================
// Fixture Fields
// =============================================================================

/// Square field of constant height.
pub fn flat_field(resolution: u32, value: f32) -> HeightField {
  HeightField::flat(resolution, resolution, value).unwrap()
}

/// Height rises linearly from 0 at `px = 0` to 1 at `px = W - 1`.
pub fn ramp_x_field(width: u32, height: u32) -> HeightField {
  let last = (width - 1) as f32;
  HeightField::from_fn(width, height, |px, _| px as f32 / last).unwrap()
}

/// Smooth dome peaking at the center.
pub fn hill_field(resolution: u32) -> HeightField {
  let c = (resolution - 1) as f32 * 0.5;
  HeightField::from_fn(resolution, resolution, |px, py| {
    let dx = (px as f32 - c) / c;
    let dy = (py as f32 - c) / c;
    (1.0 - (dx * dx + dy * dy)).max(0.0)
  })
  .unwrap()
}

/// Alternating 0/1 samples, maximally sensitive to sampling positions.
pub fn checker_field(resolution: u32) -> HeightField {
  HeightField::from_fn(resolution, resolution, |px, py| ((px + py) % 2) as f32).unwrap()
}

// =============================================================================
// Mock Sources
// =============================================================================

/// Height source that only implements the required accessors and counts
/// exact reads.
pub struct CountingSource {
  pub inner: HeightField,
  pub reads: AtomicUsize,
}

impl CountingSource {
  pub fn new(inner: HeightField) -> Self {
    Self {
      inner,
      reads: AtomicUsize::new(0),
    }
  }

  pub fn read_count(&self) -> usize {
    self.reads.load(Ordering::Relaxed)
  }
}

impl HeightSource for CountingSource {
  fn width(&self) -> u32 {
    self.inner.width()
  }

  fn height(&self) -> u32 {
    self.inner.height()
  }

  fn sample_exact(&self, px: u32, py: u32) -> Result<f32> {
    self.reads.fetch_add(1, Ordering::Relaxed);
    self.inner.sample_exact(px, py)
  }
}

/// Height source whose read of one pixel fails.
pub struct FailingSource {
  pub inner: HeightField,
  pub bad_pixel: (u32, u32),
}

impl FailingSource {
  pub fn new(inner: HeightField, bad_pixel: (u32, u32)) -> Self {
    Self { inner, bad_pixel }
  }
}

impl HeightSource for FailingSource {
  fn width(&self) -> u32 {
    self.inner.width()
  }

  fn height(&self) -> u32 {
    self.inner.height()
  }

  fn sample_exact(&self, px: u32, py: u32) -> Result<f32> {
    if (px, py) == self.bad_pixel {
      return Err(GeoMipMapError::SamplerOutOfRange {
        x: px,
        y: py,
        width: self.width(),
        height: self.height(),
      });
    }
    self.inner.sample_exact(px, py)
  }
}

/// Approximate float comparison.
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
  (a - b).abs() < epsilon
}
