//! Configuration parsing for landscape baking.

use anyhow::{Context, Result};
use geomipmap::LandscapeConfig;
use serde::Deserialize;
use std::path::Path;

/// Root configuration for landscape baking.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Height-map image, relative to the config file.
	pub heightmap: String,
	/// Output directory relative to the config file.
	#[serde(default = "default_output_dir")]
	pub output_dir: String,
	/// Flip image rows so image row 0 becomes the far (max Z) edge.
	#[serde(default = "default_true")]
	pub flip_y: bool,
	/// Build blocks on the rayon pool.
	#[serde(default = "default_true")]
	pub parallel: bool,
	/// Generator settings.
	#[serde(default)]
	pub landscape: LandscapeConfig,
}

fn default_output_dir() -> String {
	"landscape".to_string()
}

fn default_true() -> bool {
	true
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration from a TOML string.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.heightmap.is_empty() {
			anyhow::bail!("heightmap path must not be empty");
		}
		config
			.landscape
			.extent
			.validate()
			.context("Invalid [landscape.extent]")?;
		if let geomipmap::Tiling::Fixed { block_quad_size } = config.landscape.tiling {
			if block_quad_size == 0 || !block_quad_size.is_power_of_two() {
				anyhow::bail!(
					"block_quad_size must be a power of 2, got {}",
					block_quad_size
				);
			}
		}

		Ok(config)
	}
}
