//! Height-map image loading.
//!
//! The red channel carries the normalized height. Images are decoded to
//! 32-bit float RGBA so 8-bit and 16-bit sources map onto `[0, 1]` alike.

use anyhow::{Context, Result};
use geomipmap::HeightField;
use image::DynamicImage;
use std::path::Path;

/// Load a height-map image from disk.
pub fn load(path: &Path, flip_y: bool) -> Result<HeightField> {
	let img = image::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
	from_image(&img, flip_y).with_context(|| format!("Converting height map: {}", path.display()))
}

/// Convert a decoded image into a height field.
///
/// With `flip_y`, the last image row becomes pixel row 0.
pub fn from_image(img: &DynamicImage, flip_y: bool) -> Result<HeightField> {
	let rgba = img.to_rgba32f();
	let (width, height) = rgba.dimensions();

	let field = HeightField::from_fn(width, height, |px, py| {
		let row = if flip_y { height - 1 - py } else { py };
		rgba.get_pixel(px, row)[0]
	})?;

	Ok(field)
}
