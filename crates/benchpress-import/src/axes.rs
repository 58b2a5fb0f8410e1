//! Fixed axis permutation between document space and scene space
//!
//! Blockbench's first coordinate lands on the scene's Y axis, the second on
//! Z, the third on X. Every triple read from a document goes through this
//! remap exactly once.

use benchpress_core::Vec3;

/// Document axis holding the scene X component
pub const X_INDEX: usize = 2;
/// Document axis holding the scene Y component
pub const Y_INDEX: usize = 0;
/// Document axis holding the scene Z component
pub const Z_INDEX: usize = 1;

/// Remap a document triple into scene space. None when the slice is short.
pub fn remap(triple: &[f64]) -> Option<Vec3> {
    if triple.len() < 3 {
        return None;
    }
    Some(Vec3::new(
        triple[X_INDEX] as f32,
        triple[Y_INDEX] as f32,
        triple[Z_INDEX] as f32,
    ))
}

/// Remap a document triple of degrees into scene-space radians
pub fn remap_degrees(triple: &[f64]) -> Option<Vec3> {
    if triple.len() < 3 {
        return None;
    }
    Some(Vec3::new(
        (triple[X_INDEX] as f32).to_radians(),
        (triple[Y_INDEX] as f32).to_radians(),
        (triple[Z_INDEX] as f32).to_radians(),
    ))
}
