//! Quad-grid index emission.
//!
//! Vertex grid is row-major, `index = row * cols + col`, with rows running
//! along +Z. Both policies wind so that the right-handed face normal
//! `(p1 - p0) × (p2 - p0)` points +Y on flat ground:
//!
//! ```text
//!   i01 ──── i11        RisingDiagonal:   [i00, i01, i11]  [i00, i11, i10]
//!    │        │         FallingDiagonal:  [i00, i01, i10]  [i10, i01, i11]
//!    │        │
//!   i00 ──── i10        i00 = (x, y)     i10 = (x+1, y)
//!                       i01 = (x, y+1)   i11 = (x+1, y+1)
//! ```

use crate::types::TriangulationPolicy;

/// Six indices (two triangles) for one quad.
#[inline(always)]
pub fn quad_indices(
  i00: u32,
  i10: u32,
  i01: u32,
  i11: u32,
  policy: TriangulationPolicy,
) -> [u32; 6] {
  match policy {
    TriangulationPolicy::RisingDiagonal => [i00, i01, i11, i00, i11, i10],
    TriangulationPolicy::FallingDiagonal => [i00, i01, i10, i10, i01, i11],
  }
}

/// Index list for a `cols × rows` vertex grid.
///
/// Returns an empty list if either axis has fewer than two vertices.
pub fn grid_indices(cols: usize, rows: usize, policy: TriangulationPolicy) -> Vec<u32> {
  if cols < 2 || rows < 2 {
    return Vec::new();
  }

  let quads_x = cols - 1;
  let mut indices = vec![0u32; quads_x * (rows - 1) * 6];

  for (quad, out) in indices.chunks_exact_mut(6).enumerate() {
    let x = quad % quads_x;
    let y = quad / quads_x;

    let i00 = (y * cols + x) as u32;
    let i10 = i00 + 1;
    let i01 = i00 + cols as u32;
    let i11 = i01 + 1;

    out.copy_from_slice(&quad_indices(i00, i10, i01, i11, policy));
  }

  indices
}

#[cfg(test)]
#[path = "triangulation_test.rs"]
mod triangulation_test;
