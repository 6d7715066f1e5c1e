//! Landscape baker.
//!
//! Turns a height-map image into GeoMipMap meshes on disk:
//! - Landscape_LOD{n}.obj: one object per block, named Block<bx,by>
//! - landscape.mtl: one material per level, tinted blue by LOD

mod config;
mod heightmap;
mod obj;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use config::Config;

/// GeoMipMap landscape baker.
#[derive(Parser, Debug)]
#[command(name = "bake_landscape")]
#[command(about = "Bakes a height-map image into per-LOD landscape OBJ meshes")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Height-map image (overrides the config file).
	#[arg(long)]
	heightmap: Option<PathBuf>,

	/// Output directory (overrides the config file).
	#[arg(short, long)]
	output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();

	// Paths in the config file are relative to it
	let config_dir = args
		.config
		.parent()
		.unwrap_or(Path::new("."))
		.to_path_buf();

	log::info!("Loading config from: {}", args.config.display());
	let config = Config::load(&args.config)?;

	let heightmap_path = args
		.heightmap
		.unwrap_or_else(|| config_dir.join(&config.heightmap));
	let output_dir = args
		.output_dir
		.unwrap_or_else(|| config_dir.join(&config.output_dir));

	log::info!("Loading height map: {}", heightmap_path.display());
	let field = heightmap::load(&heightmap_path, config.flip_y)?;
	log::info!("Height map is {}x{}", field.width(), field.height());

	let (landscape, stats) =
		geomipmap::generate_timed(&field, &config.landscape, config.parallel)
			.context("Generating landscape")?;
	log::info!(
		"Built {} levels / {} blocks / {} triangles in {:.1}ms",
		stats.level_count,
		stats.block_count,
		stats.triangle_count,
		stats.total_us as f64 / 1000.0
	);

	std::fs::create_dir_all(&output_dir)
		.with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

	write_file(&output_dir.join(obj::MATERIAL_LIBRARY), |out| {
		obj::write_materials(out, &landscape)
	})?;

	for level in landscape.levels() {
		let path = output_dir.join(format!("{}.obj", level.name()));
		write_file(&path, |out| obj::write_level(out, level))?;
		log::info!(
			"  {} ({} blocks, {} vertices)",
			path.display(),
			level.blocks.len(),
			level.vertex_count()
		);
	}

	log::info!("Done! Output written to: {}", output_dir.display());

	Ok(())
}

/// Create `path` and stream content into it through a buffered writer.
fn write_file<F>(path: &Path, write: F) -> Result<()>
where
	F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
	let file =
		File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
	let mut out = BufWriter::new(file);
	write(&mut out).with_context(|| format!("Failed to write: {}", path.display()))?;
	out.flush()
		.with_context(|| format!("Failed to write: {}", path.display()))?;
	Ok(())
}
