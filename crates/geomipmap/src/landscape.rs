//! Landscape generation entry points.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ generate(source, config)                                                │
//! │                                                                         │
//! │  1. extent.validate()          → InvalidExtent                          │
//! │  2. resolution::validate(W, H) → NullInput / InvalidResolution          │
//! │  3. lod::plan_with_limit       → [LOD0, LOD1, ...]                      │
//! │  4. partition every level      → InvalidWindow                          │
//! │     (all windows planned before the first mesh is built)                │
//! │  5. mesh::build per window     → Mesh                                   │
//! │  6. regroup by level           → Landscape                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`generate`] builds blocks in order on the calling thread. [`generate_par`]
//! builds them on the rayon pool and yields the same `Landscape`. Either way a
//! failure returns the error and no partial result.

use rayon::prelude::*;
use web_time::Instant;

use crate::error::{GeoMipMapError, Result};
use crate::height_field::HeightSource;
use crate::lod::{self, LodLevel};
use crate::mesh;
use crate::partition::{self, BlockWindow};
use crate::resolution;
use crate::types::{LandscapeConfig, Mesh};

// =============================================================================
// Output Types
// =============================================================================

/// One built tile of a LOD level.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
  /// Pixel window the mesh was sampled from.
  pub window: BlockWindow,
  pub mesh: Mesh,
}

impl Block {
  /// Block grid coordinates `(bx, by)` within its level.
  #[inline]
  pub fn coord(&self) -> [u32; 2] {
    self.window.coord
  }

  /// Display name, e.g. `Block<3,1>`.
  pub fn name(&self) -> String {
    self.window.name()
  }
}

/// All blocks of one LOD level, row-major (`by` outer).
#[derive(Clone, Debug, PartialEq)]
pub struct LandscapeLevel {
  pub level: LodLevel,
  pub blocks: Vec<Block>,
}

impl LandscapeLevel {
  /// Display name, e.g. `Landscape_LOD0`.
  pub fn name(&self) -> String {
    self.level.name()
  }

  /// Block at grid coordinates `(bx, by)`.
  pub fn block(&self, bx: u32, by: u32) -> Option<&Block> {
    self.blocks.iter().find(|b| b.coord() == [bx, by])
  }

  pub fn vertex_count(&self) -> usize {
    self.blocks.iter().map(|b| b.mesh.vertex_count()).sum()
  }

  pub fn triangle_count(&self) -> usize {
    self.blocks.iter().map(|b| b.mesh.triangle_count()).sum()
  }
}

/// Generated GeoMipMap hierarchy, finest level first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Landscape {
  levels: Vec<LandscapeLevel>,
}

impl Landscape {
  pub fn levels(&self) -> &[LandscapeLevel] {
    &self.levels
  }

  pub fn level(&self, index: usize) -> Option<&LandscapeLevel> {
    self.levels.get(index)
  }

  pub fn level_count(&self) -> usize {
    self.levels.len()
  }

  pub fn block_count(&self) -> usize {
    self.levels.iter().map(|l| l.blocks.len()).sum()
  }

  pub fn vertex_count(&self) -> usize {
    self.levels.iter().map(LandscapeLevel::vertex_count).sum()
  }

  pub fn triangle_count(&self) -> usize {
    self.levels.iter().map(LandscapeLevel::triangle_count).sum()
  }

  /// Debug colour for a level: blue fading with coarseness.
  ///
  /// tint = (0.2, 0.2, 1 - lod·0.8/level_count)
  pub fn lod_tint(&self, lod: usize) -> [f32; 3] {
    let count = self.levels.len().max(1) as f32;
    [0.2, 0.2, 1.0 - lod as f32 * 0.8 / count]
  }

  pub fn into_levels(self) -> Vec<LandscapeLevel> {
    self.levels
  }
}

/// Statistics from one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
  pub level_count: usize,
  pub block_count: usize,
  pub vertex_count: usize,
  pub triangle_count: usize,
  /// Wall time in microseconds.
  pub total_us: u64,
}

impl GenerationStats {
  fn from_landscape(landscape: &Landscape, total_us: u64) -> Self {
    Self {
      level_count: landscape.level_count(),
      block_count: landscape.block_count(),
      vertex_count: landscape.vertex_count(),
      triangle_count: landscape.triangle_count(),
      total_us,
    }
  }
}

// =============================================================================
// Planning
// =============================================================================

/// Every level with its block windows, fully validated.
struct Plan {
  levels: Vec<(LodLevel, Vec<BlockWindow>)>,
}

impl Plan {
  fn block_count(&self) -> usize {
    self.levels.iter().map(|(_, windows)| windows.len()).sum()
  }

  /// Every window of every level, in output order.
  fn jobs(&self) -> Vec<BlockWindow> {
    let mut jobs = Vec::with_capacity(self.block_count());
    for (_, windows) in &self.levels {
      jobs.extend_from_slice(windows);
    }
    jobs
  }

  /// Pair built meshes (in `jobs()` order) back up with their levels.
  fn assemble(self, meshes: Vec<Mesh>) -> Landscape {
    let mut meshes = meshes.into_iter();
    let levels = self
      .levels
      .into_iter()
      .map(|(level, windows)| LandscapeLevel {
        level,
        blocks: windows
          .into_iter()
          .zip(meshes.by_ref())
          .map(|(window, mesh)| Block { window, mesh })
          .collect(),
      })
      .collect();
    Landscape { levels }
  }
}

fn plan<S: HeightSource + ?Sized>(source: &S, config: &LandscapeConfig) -> Result<Plan> {
  config.extent.validate()?;

  let (width, height) = (source.width(), source.height());
  if width == 0 || height == 0 {
    return Err(GeoMipMapError::NullInput);
  }
  resolution::validate(width, height)?;

  let lods = lod::plan_with_limit(width, height, config.max_levels);
  let mut levels = Vec::with_capacity(lods.len());
  for level in lods {
    let windows = partition::partition(&level, config.tiling, width, height)?;
    levels.push((level, windows));
  }

  Ok(Plan { levels })
}

fn log_summary(landscape: &Landscape, elapsed_us: u64) {
  tracing::info!(
    "Generated {} LOD levels, {} blocks, {} vertices, {} triangles in {}us",
    landscape.level_count(),
    landscape.block_count(),
    landscape.vertex_count(),
    landscape.triangle_count(),
    elapsed_us
  );
}

// =============================================================================
// Entry Points
// =============================================================================

/// Generate the landscape on the calling thread.
///
/// # Errors
///
/// - `InvalidExtent` if the world size is not positive
/// - `NullInput` if the source has no samples
/// - `InvalidResolution` if either dimension is unsupported
/// - `InvalidWindow` if the tiling does not divide a level
/// - `SamplerOutOfRange` if a block reads outside the source
#[tracing::instrument(skip_all, fields(width = source.width(), height = source.height()))]
pub fn generate<S: HeightSource + ?Sized>(
  source: &S,
  config: &LandscapeConfig,
) -> Result<Landscape> {
  let start = Instant::now();
  let planned = plan(source, config)?;

  let meshes = planned
    .jobs()
    .iter()
    .map(|window| mesh::build(window, source, &config.extent, config.triangulation))
    .collect::<Result<Vec<_>>>()?;

  let landscape = planned.assemble(meshes);
  log_summary(&landscape, start.elapsed().as_micros() as u64);
  Ok(landscape)
}

/// Generate the landscape with every block built on the rayon pool.
///
/// Output is identical to [`generate`], block order included.
#[tracing::instrument(skip_all, fields(width = source.width(), height = source.height()))]
pub fn generate_par<S: HeightSource + ?Sized>(
  source: &S,
  config: &LandscapeConfig,
) -> Result<Landscape> {
  let start = Instant::now();
  let planned = plan(source, config)?;

  let meshes = planned
    .jobs()
    .into_par_iter()
    .map(|window| mesh::build(&window, source, &config.extent, config.triangulation))
    .collect::<Result<Vec<_>>>()?;

  let landscape = planned.assemble(meshes);
  log_summary(&landscape, start.elapsed().as_micros() as u64);
  Ok(landscape)
}

/// Run [`generate`] or [`generate_par`] and report statistics.
pub fn generate_timed<S: HeightSource + ?Sized>(
  source: &S,
  config: &LandscapeConfig,
  parallel: bool,
) -> Result<(Landscape, GenerationStats)> {
  let start = Instant::now();
  let landscape = if parallel {
    generate_par(source, config)?
  } else {
    generate(source, config)?
  };
  let total_us = start.elapsed().as_micros() as u64;

  let stats = GenerationStats::from_landscape(&landscape, total_us);
  Ok((landscape, stats))
}

#[cfg(test)]
#[path = "landscape_test.rs"]
mod landscape_test;
