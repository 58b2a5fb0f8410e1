//! The scene-side capability the import pipeline drives
//!
//! The pipeline never touches a host scene directly. Everything it creates
//! goes through this trait, which keeps the geometry logic pure and lets
//! tests run against a recording stub while the real host adapter stays a
//! thin shim.

use benchpress_core::{Result, Vec3};

/// Host scene operations consumed by the importer
pub trait SceneBuilder {
    /// Handle to a created mesh or group node
    type Node: Copy + Eq;
    /// Handle to a created material
    type Material: Copy;

    /// Create a cuboid mesh. `dimensions` must be baked into the geometry at
    /// creation time so scale never recombines with `rotation` (Euler
    /// radians) or with keyframe rotation layered on later. The mesh's 24 UV
    /// loops follow face order north, east, south, west, down, up — four
    /// consecutive loops per face.
    fn create_cuboid(
        &mut self,
        name: &str,
        dimensions: Vec3,
        position: Vec3,
        rotation: Option<Vec3>,
    ) -> Self::Node;

    /// Create an empty group node at a parent-relative position
    fn create_group(&mut self, name: &str, position: Vec3) -> Self::Node;

    /// Attach `child` under `parent`
    fn set_parent(&mut self, child: Self::Node, parent: Self::Node);

    /// Move a node by `delta` relative to its current position
    fn translate(&mut self, node: Self::Node, delta: Vec3);

    /// Set one UV loop on a mesh. `loop_index` is `4 * face + corner`.
    fn set_uv(&mut self, mesh: Self::Node, loop_index: usize, uv: (f32, f32));

    /// Create a material from encoded image bytes (nearest-neighbor sampled)
    fn create_material(&mut self, image_bytes: &[u8]) -> Result<Self::Material>;

    /// Assign a material to a mesh
    fn assign_material(&mut self, mesh: Self::Node, material: Self::Material);

    /// Commit a rotation keyframe at a frame position
    fn insert_rotation_keyframe(&mut self, node: Self::Node, frame: i64, euler: Vec3);

    /// Mark every animation curve on the node as linear
    /// interpolation/extrapolation. Idempotent; the applier calls it after
    /// each keyframe insertion.
    fn set_linear_interpolation(&mut self, node: Self::Node);
}
