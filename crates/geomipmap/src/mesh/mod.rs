//! Block mesh construction.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  window: BlockWindow     - pixel range, stride, sampling mode   │
//! │  source: HeightSource    - normalized heights                   │
//! │  extent: WorldExtent     - world size, base height, scale       │
//! │  policy: Triangulation   - rising or falling diagonal           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 1: Vertices                             │
//! │  For each (px, py) in the window, stepped by stride:            │
//! │    h = exact(px, py) | bilinear(px/(W-1), py/(H-1))             │
//! │    position = (px·qx, base + h·scale, py·qz)                    │
//! │    uv = (col/(cols-1), row/(rows-1))   (block-local)            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 2: Triangulation                        │
//! │  Two triangles per quad, one diagonal policy for the mesh       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 3: Normals                              │
//! │  Accumulate unit face normals per vertex, normalize             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All buffers are sized up front and written by index.

pub mod normals;
pub mod triangulation;

use crate::error::{GeoMipMapError, Result};
use crate::height_field::HeightSource;
use crate::partition::{BlockWindow, Sampling};
use crate::types::{Mesh, MinMaxAABB, TriangulationPolicy, WorldExtent};

/// Sample positions along one axis, closing with `max` when the stride does
/// not land on it.
fn axis_samples(min: u32, max: u32, step: u32) -> Vec<u32> {
  let mut samples: Vec<u32> = (min..=max).step_by(step as usize).collect();
  if samples.last() != Some(&max) {
    samples.push(max);
  }
  samples
}

/// Build the mesh for one block.
///
/// # Errors
///
/// - `InvalidWindow` if the stride is zero, the window is empty, or an exact
///   window's stride does not divide its span
/// - `SamplerOutOfRange` if the window reaches outside the source
/// - `NullInput` if the source has no samples
pub fn build<S: HeightSource + ?Sized>(
  window: &BlockWindow,
  source: &S,
  extent: &WorldExtent,
  policy: TriangulationPolicy,
) -> Result<Mesh> {
  window.validate()?;

  let (width, height) = (source.width(), source.height());
  if width == 0 || height == 0 {
    return Err(GeoMipMapError::NullInput);
  }
  if window.pixel_max[0] >= width || window.pixel_max[1] >= height {
    return Err(GeoMipMapError::SamplerOutOfRange {
      x: window.pixel_max[0],
      y: window.pixel_max[1],
      width,
      height,
    });
  }

  let xs = axis_samples(window.pixel_min[0], window.pixel_max[0], window.step[0]);
  let ys = axis_samples(window.pixel_min[1], window.pixel_max[1], window.step[1]);
  let (cols, rows) = (xs.len(), ys.len());
  let vertex_count = cols * rows;

  let quad_size = extent.quad_size(width, height);
  let inv_last_px = [
    1.0 / (width - 1).max(1) as f32,
    1.0 / (height - 1).max(1) as f32,
  ];
  let inv_last_vertex = [1.0 / (cols - 1) as f32, 1.0 / (rows - 1) as f32];

  let mut positions = vec![[0.0f32; 3]; vertex_count];
  let mut tex_coords = vec![[0.0f32; 2]; vertex_count];
  let mut bounds = MinMaxAABB::empty();

  // =========================================================================
  // Pass 1: Vertices
  // =========================================================================
  for (row, &py) in ys.iter().enumerate() {
    for (col, &px) in xs.iter().enumerate() {
      let normalized = match window.sampling {
        Sampling::Exact => source.sample_exact(px, py)?,
        Sampling::Bilinear => {
          source.sample_bilinear(px as f32 * inv_last_px[0], py as f32 * inv_last_px[1])?
        }
      };

      let position = [
        px as f32 * quad_size[0],
        extent.world_height(normalized),
        py as f32 * quad_size[1],
      ];

      let i = row * cols + col;
      positions[i] = position;
      tex_coords[i] = [
        col as f32 * inv_last_vertex[0],
        row as f32 * inv_last_vertex[1],
      ];
      bounds.encapsulate(position);
    }
  }

  // =========================================================================
  // Pass 2: Triangulation
  // =========================================================================
  let indices = triangulation::grid_indices(cols, rows, policy);

  // =========================================================================
  // Pass 3: Normals
  // =========================================================================
  let normals = normals::recalculate(&positions, &indices);

  Ok(Mesh {
    positions,
    tex_coords,
    indices,
    normals,
    bounds,
  })
}
