//! geomipmap - Height-field to GeoMipMap landscape meshes
//!
//! This crate turns a single-channel height field into a hierarchy of
//! triangle meshes, one per level of detail, each level optionally split into
//! fixed-size blocks for streaming and culling. It performs no I/O: callers
//! supply a [`HeightSource`] and receive plain vertex/index buffers.
//!
//! # Features
//!
//! - **LOD planning**: quad counts halve per level until either axis reaches
//!   16, so every coarser level is an exact subset of the finer one
//! - **Tiling**: fixed-size exact-sampled blocks, or one bilinear-sampled
//!   mesh per level
//! - **Triangulation policies**: rising or falling quad diagonal, chosen per
//!   build
//! - **Parallel generation**: every block builds independently on rayon
//!
//! # Example
//!
//! ```ignore
//! use geomipmap::{generate, HeightField, LandscapeConfig, WorldExtent};
//!
//! // 129×129 dome
//! let field = HeightField::from_fn(129, 129, |px, py| {
//!     let dx = px as f32 / 64.0 - 1.0;
//!     let dy = py as f32 / 64.0 - 1.0;
//!     (1.0 - dx * dx - dy * dy).max(0.0)
//! })?;
//!
//! let config = LandscapeConfig::new()
//!     .with_extent(WorldExtent::new([1000.0, 1000.0], 10.0, 50.0))
//!     .with_block_quad_size(16);
//!
//! let landscape = generate(&field, &config)?;
//! for level in landscape.levels() {
//!     println!("{}: {} blocks, {} vertices",
//!         level.name(), level.blocks.len(), level.vertex_count());
//! }
//! ```

pub mod constants;
pub mod error;
pub mod height_field;
pub mod lod;
pub mod partition;
pub mod resolution;
pub mod types;

// Re-export commonly used items
pub use constants::{
  index_to_pixel, pixel_to_index, DEFAULT_BLOCK_QUAD_SIZE, MAX_RESOLUTION, MIN_LEVEL_QUAD_COUNT,
  MIN_RESOLUTION,
};
pub use error::{GeoMipMapError, ResolutionIssue, Result};
pub use height_field::{HeightField, HeightSource};
pub use lod::{LodLevel, LodPlan};
pub use partition::{BlockWindow, Sampling};
pub use types::{LandscapeConfig, Mesh, MinMaxAABB, Tiling, TriangulationPolicy, WorldExtent};

// Per-block mesh construction
pub mod mesh;

// Generation entry points
pub mod landscape;
pub use landscape::{
  generate, generate_par, generate_timed, Block, GenerationStats, Landscape, LandscapeLevel,
};

#[cfg(test)]
mod test_utils;
