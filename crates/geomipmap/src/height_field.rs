//! Read-only height field accessors.
//!
//! A height field is a `W×H` grid of normalized samples in `[0, 1]`. The
//! generator only needs the [`HeightSource`] contract; [`HeightField`] is the
//! owned, row-major implementation of it.
//!
//! # Bilinear Sampling
//!
//! ```text
//!   (u, v) ∈ [0,1]²  ──►  (x, y) = (u·W, v·H), clamped to [0, W-1]×[0, H-1]
//!
//!     s01 ─────────── s11        x0 = floor(x), x1 = min(x0 + 1, W - 1)
//!      │       ●       │         fx = x - x0
//!      │    (x, y)     │
//!      │               │         h = lerp(lerp(s00, s10, fx),
//!     s00 ─────────── s10                 lerp(s01, s11, fx), fy)
//! ```

use crate::constants::pixel_to_index;
use crate::error::{GeoMipMapError, Result};

/// Accessor contract for any height source (image, procedural field, ...).
///
/// Implementations must be immutable for the duration of a build; the
/// generator may read them from several threads at once.
pub trait HeightSource: Send + Sync {
  /// Sample count along X.
  fn width(&self) -> u32;

  /// Sample count along Y.
  fn height(&self) -> u32;

  /// Normalized height at an integer pixel.
  ///
  /// Fails with `SamplerOutOfRange` if `px >= width` or `py >= height`.
  fn sample_exact(&self, px: u32, py: u32) -> Result<f32>;

  /// Bilinearly interpolated height at normalized coordinates `(u, v)`.
  ///
  /// Coordinates outside `[0, 1]` clamp to the nearest edge. Fails with
  /// `NullInput` on an empty source, and with whatever error a corner read
  /// returns.
  fn sample_bilinear(&self, u: f32, v: f32) -> Result<f32> {
    let (w, h) = (self.width(), self.height());
    if w == 0 || h == 0 {
      return Err(GeoMipMapError::NullInput);
    }
    let footprint = BilinearFootprint::new(u, v, w, h);
    footprint.interpolate(|px, py| self.sample_exact(px, py))
  }
}

/// Blanket impl for boxed trait objects.
impl HeightSource for Box<dyn HeightSource> {
  fn width(&self) -> u32 {
    (**self).width()
  }

  fn height(&self) -> u32 {
    (**self).height()
  }

  fn sample_exact(&self, px: u32, py: u32) -> Result<f32> {
    (**self).sample_exact(px, py)
  }

  fn sample_bilinear(&self, u: f32, v: f32) -> Result<f32> {
    (**self).sample_bilinear(u, v)
  }
}

impl<T: HeightSource + ?Sized> HeightSource for &T {
  fn width(&self) -> u32 {
    (**self).width()
  }

  fn height(&self) -> u32 {
    (**self).height()
  }

  fn sample_exact(&self, px: u32, py: u32) -> Result<f32> {
    (**self).sample_exact(px, py)
  }

  fn sample_bilinear(&self, u: f32, v: f32) -> Result<f32> {
    (**self).sample_bilinear(u, v)
  }
}

/// The four pixels and weights that contribute to one bilinear sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BilinearFootprint {
  pub x: [u32; 2],
  pub y: [u32; 2],
  pub fx: f32,
  pub fy: f32,
}

impl BilinearFootprint {
  /// Requires `width > 0` and `height > 0`.
  pub fn new(u: f32, v: f32, width: u32, height: u32) -> Self {
    let (x0, x1, fx) = axis_footprint(u, width);
    let (y0, y1, fy) = axis_footprint(v, height);
    Self {
      x: [x0, x1],
      y: [y0, y1],
      fx,
      fy,
    }
  }

  #[inline]
  pub fn interpolate(&self, mut sample: impl FnMut(u32, u32) -> Result<f32>) -> Result<f32> {
    let s00 = sample(self.x[0], self.y[0])?;
    let s10 = sample(self.x[1], self.y[0])?;
    let s01 = sample(self.x[0], self.y[1])?;
    let s11 = sample(self.x[1], self.y[1])?;

    let bottom = s00 + (s10 - s00) * self.fx;
    let top = s01 + (s11 - s01) * self.fx;
    Ok(bottom + (top - bottom) * self.fy)
  }
}

#[inline(always)]
fn axis_footprint(t: f32, size: u32) -> (u32, u32, f32) {
  let last = (size - 1) as f32;
  let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
  let coord = (t * size as f32).min(last);
  let i0 = coord.floor() as u32;
  let i1 = (i0 + 1).min(size - 1);
  (i0, i1, coord - i0 as f32)
}

/// Clamp a raw sample into the normalized range. NaN reads as 0.
#[inline(always)]
fn normalize_sample(value: f32) -> f32 {
  if value.is_nan() {
    0.0
  } else {
    value.clamp(0.0, 1.0)
  }
}

/// Owned, row-major grid of normalized height samples.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
  width: u32,
  height: u32,
  samples: Vec<f32>,
}

impl HeightField {
  /// Wrap a row-major sample buffer (`index = py * width + px`).
  ///
  /// Values are clamped to `[0, 1]`. Resolution limits are not checked here;
  /// generation validates them.
  pub fn new(width: u32, height: u32, mut samples: Vec<f32>) -> Result<Self> {
    if width == 0 || height == 0 || samples.is_empty() {
      return Err(GeoMipMapError::NullInput);
    }
    let expected = width as usize * height as usize;
    if samples.len() != expected {
      return Err(GeoMipMapError::SampleCountMismatch {
        expected,
        actual: samples.len(),
      });
    }
    for s in &mut samples {
      *s = normalize_sample(*s);
    }
    Ok(Self {
      width,
      height,
      samples,
    })
  }

  /// Build a field by evaluating `f(px, py)` for every pixel.
  pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f32) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(GeoMipMapError::NullInput);
    }
    let mut samples = vec![0.0; width as usize * height as usize];
    for py in 0..height {
      for px in 0..width {
        samples[pixel_to_index(px, py, width)] = f(px, py);
      }
    }
    Self::new(width, height, samples)
  }

  /// Field with every sample set to `value`.
  pub fn flat(width: u32, height: u32, value: f32) -> Result<Self> {
    Self::from_fn(width, height, |_, _| value)
  }

  /// Snapshot any height source into an owned field.
  pub fn from_source<S: HeightSource + ?Sized>(source: &S) -> Result<Self> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
      return Err(GeoMipMapError::NullInput);
    }
    let mut samples = Vec::with_capacity(width as usize * height as usize);
    for py in 0..height {
      for px in 0..width {
        samples.push(source.sample_exact(px, py)?);
      }
    }
    Self::new(width, height, samples)
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  /// Row-major samples.
  pub fn samples(&self) -> &[f32] {
    &self.samples
  }

  /// Sample at a pixel, or `None` outside the grid.
  #[inline]
  pub fn get(&self, px: u32, py: u32) -> Option<f32> {
    if px < self.width && py < self.height {
      Some(self.samples[pixel_to_index(px, py, self.width)])
    } else {
      None
    }
  }
}

impl HeightSource for HeightField {
  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  #[inline]
  fn sample_exact(&self, px: u32, py: u32) -> Result<f32> {
    self.get(px, py).ok_or(GeoMipMapError::SamplerOutOfRange {
      x: px,
      y: py,
      width: self.width,
      height: self.height,
    })
  }

  fn sample_bilinear(&self, u: f32, v: f32) -> Result<f32> {
    // Footprint indices are clamped in range
    let footprint = BilinearFootprint::new(u, v, self.width, self.height);
    footprint.interpolate(|px, py| Ok(self.samples[pixel_to_index(px, py, self.width)]))
  }
}

#[cfg(test)]
#[path = "height_field_test.rs"]
mod height_field_test;
