//! Smooth vertex normals from triangle geometry.
//!
//! Each non-degenerate triangle adds its unit face normal to its three
//! vertices; the sums are then normalized. Vertices on a block edge only see
//! the triangles of their own block, so normals along block seams differ from
//! their neighbours' until a caller merges the seam vertices and calls
//! [`recalculate`] again.

use glam::Vec3A;

const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Recalculate per-vertex normals for an indexed triangle list.
///
/// Triangles referencing an index outside `positions` are ignored. Vertices
/// touched by no valid triangle get +Y.
pub fn recalculate(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
  let mut accumulated = vec![Vec3A::ZERO; positions.len()];

  for tri in indices.chunks_exact(3) {
    let i0 = tri[0] as usize;
    let i1 = tri[1] as usize;
    let i2 = tri[2] as usize;
    if i0 >= positions.len() || i1 >= positions.len() || i2 >= positions.len() {
      continue;
    }

    let p0 = Vec3A::from_array(positions[i0]);
    let p1 = Vec3A::from_array(positions[i1]);
    let p2 = Vec3A::from_array(positions[i2]);

    let e01 = p1 - p0;
    let e02 = p2 - p0;
    let face_normal = e01.cross(e02);
    let len_sq = face_normal.length_squared();

    // Skip degenerate triangles; |e01 × e02|² = |e01|²·|e02|²·sin²θ
    if len_sq == 0.0 || len_sq <= f32::EPSILON * e01.length_squared() * e02.length_squared() {
      continue;
    }

    let unit = face_normal * len_sq.sqrt().recip();
    accumulated[i0] += unit;
    accumulated[i1] += unit;
    accumulated[i2] += unit;
  }

  accumulated
    .into_iter()
    .map(|n| {
      let len_sq = n.length_squared();
      if len_sq < 1e-12 {
        UP
      } else {
        (n * len_sq.sqrt().recip()).to_array()
      }
    })
    .collect()
}

#[cfg(test)]
#[path = "normals_test.rs"]
mod normals_test;
