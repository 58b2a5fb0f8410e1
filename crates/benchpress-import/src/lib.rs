//! Benchpress Import - `.bbmodel` reconstruction pipeline
//!
//! One synchronous pass over a parsed document: texture staging, then
//! per-element cuboid construction and UV mapping, then outliner hierarchy
//! resolution, then (optionally) rotation keyframe replay. Everything the
//! pipeline creates goes through the [`SceneBuilder`] capability; meshes and
//! groups share one uuid-keyed registry so outline leaves and animators can
//! address either kind.

mod animation;
mod axes;
mod builder;
mod cuboid;
mod outline;
#[cfg(test)]
mod testing;
mod texture;
mod uv;

pub use animation::{apply_animations, FRAMES_PER_SECOND};
pub use axes::{remap, remap_degrees};
pub use builder::SceneBuilder;
pub use cuboid::{build_cuboid, cuboid_parts, CuboidParts};
pub use outline::resolve_outliner;
pub use texture::{build_materials, TextureStage};
pub use uv::{map_uvs, FACE_ORDER};

use benchpress_core::{BenchError, Result};
use benchpress_model::Document;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Import configuration
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Replay rotation keyframes after hierarchy resolution. Off by default:
    /// the geometry import stands on its own and not every host supports
    /// keyframes.
    pub animations: bool,
}

/// Counts of what an import created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub meshes: usize,
    pub groups: usize,
    pub materials: usize,
    pub keyframes: usize,
}

/// Import a `.bbmodel` file into the scene behind `builder`.
///
/// Any failure is terminal for the whole call; nodes created before the
/// failure are not rolled back.
pub fn load<P: AsRef<Path>, B: SceneBuilder>(
    path: P,
    builder: &mut B,
    options: &ImportOptions,
) -> Result<ImportSummary> {
    let path = path.as_ref();
    log::info!("importing {}", path.display());
    let document = Document::from_file(path)?;
    import_document(&document, builder, options)
}

/// Import an already-parsed document
pub fn import_document<B: SceneBuilder>(
    document: &Document,
    builder: &mut B,
    options: &ImportOptions,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    let mut registry: HashMap<String, B::Node> = HashMap::new();

    let mut stage = TextureStage::new()?;
    let material = build_materials(builder, &mut stage, &document.textures)?;
    summary.materials = document.textures.len();

    for element in &document.elements {
        if !element.visibility {
            continue;
        }
        let mesh = build_cuboid(builder, element)?;
        let resolution = document
            .resolution
            .as_ref()
            .ok_or_else(|| BenchError::MalformedDocument("missing 'resolution'".to_string()))?;
        map_uvs(builder, mesh, element, resolution)?;
        if let Some(material) = material {
            builder.assign_material(mesh, material);
        }
        registry.insert(element.uuid.clone(), mesh);
        summary.meshes += 1;
    }

    summary.groups = resolve_outliner(builder, &document.outliner, &mut registry)?;

    if options.animations {
        summary.keyframes = apply_animations(builder, &document.animations, &registry)?;
    }

    log::info!(
        "imported {} meshes, {} groups, {} materials, {} keyframes",
        summary.meshes,
        summary.groups,
        summary.materials,
        summary.keyframes
    );
    Ok(summary)
}
