//! Height-field resolution validation.
//!
//! Accepted resolutions are `2^k + 1` samples per axis with `5 <= k <= 12`,
//! i.e. 33, 65, 129, ..., 4097. Width and height are checked independently,
//! so non-square fields are allowed.

use crate::constants::{MAX_RESOLUTION, MIN_RESOLUTION};
use crate::error::{GeoMipMapError, ResolutionIssue, Result};

/// Check a single dimension without building an error.
#[inline]
pub fn is_valid_dimension(dimension: u32) -> bool {
  (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&dimension) && (dimension - 1).is_power_of_two()
}

/// Validate a `width × height` resolution.
///
/// Range is checked before the power-of-two rule, so `32×32` reports
/// `OutOfRange` rather than `NotPowerOfTwoPlusOne`.
pub fn validate(width: u32, height: u32) -> Result<()> {
  let in_range = |d: u32| (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&d);
  if !in_range(width) || !in_range(height) {
    return Err(GeoMipMapError::InvalidResolution {
      width,
      height,
      issue: ResolutionIssue::OutOfRange,
    });
  }

  if !(width - 1).is_power_of_two() || !(height - 1).is_power_of_two() {
    return Err(GeoMipMapError::InvalidResolution {
      width,
      height,
      issue: ResolutionIssue::NotPowerOfTwoPlusOne,
    });
  }

  Ok(())
}

#[cfg(test)]
#[path = "resolution_test.rs"]
mod resolution_test;
