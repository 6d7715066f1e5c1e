//! Wavefront OBJ/MTL emission.
//!
//! One OBJ per LOD level, one `o` group per block. Blocks keep their own
//! vertices, so seam vertices appear once per block.

use geomipmap::{Landscape, LandscapeLevel};
use std::io::{self, Write};

/// Shared material library name written into every level's OBJ.
pub const MATERIAL_LIBRARY: &str = "landscape.mtl";

/// Write one material per level, tinted by LOD.
pub fn write_materials<W: Write>(out: &mut W, landscape: &Landscape) -> io::Result<()> {
	for (lod, level) in landscape.levels().iter().enumerate() {
		let [r, g, b] = landscape.lod_tint(lod);
		writeln!(out, "newmtl {}", level.name())?;
		writeln!(out, "Kd {:.6} {:.6} {:.6}", r, g, b)?;
		writeln!(out)?;
	}
	Ok(())
}

/// Write every block of a level as separate objects in one OBJ stream.
pub fn write_level<W: Write>(out: &mut W, level: &LandscapeLevel) -> io::Result<()> {
	let [qx, qy] = level.level.quad_count;
	writeln!(out, "# {} quads {}x{}", level.name(), qx, qy)?;
	writeln!(out, "mtllib {}", MATERIAL_LIBRARY)?;

	// OBJ indices are 1-based and global to the file
	let mut base = 1usize;
	for block in &level.blocks {
		let mesh = &block.mesh;
		writeln!(out, "o {}", block.name())?;
		writeln!(out, "usemtl {}", level.name())?;

		for p in &mesh.positions {
			writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
		}
		for uv in &mesh.tex_coords {
			writeln!(out, "vt {} {}", uv[0], uv[1])?;
		}
		for n in &mesh.normals {
			writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
		}
		for tri in mesh.indices.chunks_exact(3) {
			let a = base + tri[0] as usize;
			let b = base + tri[1] as usize;
			let c = base + tri[2] as usize;
			writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
		}

		base += mesh.vertex_count();
	}
	Ok(())
}
