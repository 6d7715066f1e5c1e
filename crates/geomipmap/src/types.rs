//! Core data types for landscape generation.

use crate::constants::DEFAULT_BLOCK_QUAD_SIZE;
use crate::error::{GeoMipMapError, Result};

/// World-space placement of the height field.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldExtent {
  /// World-space width (X) and depth (Z) covered by the whole field.
  pub size: [f32; 2],

  /// Vertical offset added to every vertex.
  pub base_height: f32,

  /// Multiplier applied to the normalized height sample.
  pub height_scale: f32,
}

impl Default for WorldExtent {
  fn default() -> Self {
    Self {
      size: [1000.0, 1000.0],
      base_height: 10.0,
      height_scale: 50.0,
    }
  }
}

impl WorldExtent {
  pub fn new(size: [f32; 2], base_height: f32, height_scale: f32) -> Self {
    Self {
      size,
      base_height,
      height_scale,
    }
  }

  /// Check that both size components are positive and finite.
  pub fn validate(&self) -> Result<()> {
    let ok = self.size.iter().all(|s| s.is_finite() && *s > 0.0);
    if ok {
      Ok(())
    } else {
      Err(GeoMipMapError::InvalidExtent { size: self.size })
    }
  }

  /// World distance between adjacent pixels for a field of the given
  /// resolution.
  ///
  /// quad_size = size / (resolution - 1)
  #[inline]
  pub fn quad_size(&self, width: u32, height: u32) -> [f32; 2] {
    [
      self.size[0] / (width.max(2) - 1) as f32,
      self.size[1] / (height.max(2) - 1) as f32,
    ]
  }

  /// World-space height for a normalized sample.
  #[inline(always)]
  pub fn world_height(&self, normalized: f32) -> f32 {
    self.base_height + normalized * self.height_scale
  }
}

/// Which diagonal splits each quad into two triangles.
///
/// ```text
///   RisingDiagonal (A)     FallingDiagonal (B)
///
///   (x,y+1)──(x+1,y+1)     (x,y+1)──(x+1,y+1)
///      │      ╱ │             │ ╲      │
///      │    ╱   │             │   ╲    │
///      │  ╱     │             │     ╲  │
///    (x,y)────(x+1,y)       (x,y)────(x+1,y)
/// ```
///
/// Chosen once per build; a mesh never mixes both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TriangulationPolicy {
  /// Split along `(x,y)-(x+1,y+1)`.
  #[default]
  RisingDiagonal,

  /// Split along `(x+1,y)-(x,y+1)`.
  FallingDiagonal,
}

/// How each LOD level is divided into blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum Tiling {
  /// One block spans the whole level, sampled bilinearly.
  None,

  /// Square blocks of `block_quad_size` quads per edge, sampled at exact
  /// pixels.
  Fixed {
    /// Quads per block edge. Must divide every level's quad count.
    block_quad_size: u32,
  },
}

impl Default for Tiling {
  fn default() -> Self {
    Tiling::Fixed {
      block_quad_size: DEFAULT_BLOCK_QUAD_SIZE,
    }
  }
}

/// Configuration for landscape generation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LandscapeConfig {
  /// World size and height mapping.
  pub extent: WorldExtent,

  /// Block partitioning mode.
  pub tiling: Tiling,

  /// Diagonal split used by every block.
  pub triangulation: TriangulationPolicy,

  /// Cap on emitted levels. `Some(1)` emits LOD 0 only; `None` emits all.
  pub max_levels: Option<usize>,
}

impl LandscapeConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_extent(mut self, extent: WorldExtent) -> Self {
    self.extent = extent;
    self
  }

  pub fn with_tiling(mut self, tiling: Tiling) -> Self {
    self.tiling = tiling;
    self
  }

  pub fn with_block_quad_size(mut self, block_quad_size: u32) -> Self {
    self.tiling = Tiling::Fixed { block_quad_size };
    self
  }

  pub fn with_triangulation(mut self, policy: TriangulationPolicy) -> Self {
    self.triangulation = policy;
    self
  }

  pub fn with_max_levels(mut self, max_levels: Option<usize>) -> Self {
    self.max_levels = max_levels;
    self
  }

  /// Only generate LOD 0.
  pub fn lod0_only(self) -> Self {
    self.with_max_levels(Some(1))
  }
}

/// Axis-aligned bounding box of a block mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Triangle mesh for one block.
///
/// `positions`, `tex_coords` and `normals` are parallel arrays; `indices`
/// holds 3 entries per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
  /// Vertex positions in world units.
  pub positions: Vec<[f32; 3]>,

  /// Block-local texture coordinates in [0, 1].
  pub tex_coords: Vec<[f32; 2]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Unit vertex normals.
  pub normals: Vec<[f32; 3]>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl Mesh {
  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Check the parallel-array and index-range invariants.
  pub fn is_well_formed(&self) -> bool {
    let n = self.positions.len();
    n == self.tex_coords.len()
      && n == self.normals.len()
      && self.indices.len() % 3 == 0
      && self.indices.iter().all(|&i| (i as usize) < n)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
