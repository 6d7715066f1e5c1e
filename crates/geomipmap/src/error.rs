//! Error types for landscape generation.

use std::fmt;

use thiserror::Error;

/// Why a height-field resolution was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionIssue {
  /// A dimension is outside `[MIN_RESOLUTION, MAX_RESOLUTION]`.
  OutOfRange,
  /// `dimension - 1` is not a power of two.
  NotPowerOfTwoPlusOne,
}

impl fmt::Display for ResolutionIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ResolutionIssue::OutOfRange => write!(f, "resolution must be in range 33x33 to 4097x4097"),
      ResolutionIssue::NotPowerOfTwoPlusOne => {
        write!(f, "resolution value must be (power of 2) + 1")
      }
    }
  }
}

/// Errors that can occur while generating a landscape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoMipMapError {
  /// The height source has no samples.
  #[error("height source is empty")]
  NullInput,

  /// Raw sample buffer does not match the declared dimensions.
  #[error("sample buffer holds {actual} values, expected {expected}")]
  SampleCountMismatch {
    /// `width * height`.
    expected: usize,
    /// Length of the buffer supplied.
    actual: usize,
  },

  /// Height-field dimensions are unsupported.
  #[error("invalid resolution {width}x{height}: {issue}")]
  InvalidResolution {
    /// Sample count along X.
    width: u32,
    /// Sample count along Y.
    height: u32,
    /// Which constraint failed.
    issue: ResolutionIssue,
  },

  /// World size is not strictly positive.
  #[error("world size must be positive, got {size:?}")]
  InvalidExtent {
    /// Offending world size.
    size: [f32; 2],
  },

  /// Malformed block window or tiling.
  #[error("invalid block window: {0}")]
  InvalidWindow(String),

  /// A pixel coordinate fell outside the height field.
  #[error("pixel ({x}, {y}) is outside the {width}x{height} height field")]
  SamplerOutOfRange {
    /// Requested pixel X.
    x: u32,
    /// Requested pixel Y.
    y: u32,
    /// Field width.
    width: u32,
    /// Field height.
    height: u32,
  },
}

/// Result type for landscape generation.
pub type Result<T> = std::result::Result<T, GeoMipMapError>;
