//! `SceneBuilder` implementation for the in-memory graph
//!
//! Each method is a one-line shim onto the graph; a real editor integration
//! would look the same over its own scene API.

use crate::graph::{MaterialId, NodeId, SceneGraph};
use crate::material::Material;
use benchpress_core::{Result, Vec3};
use benchpress_import::SceneBuilder;

impl SceneBuilder for SceneGraph {
    type Node = NodeId;
    type Material = MaterialId;

    fn create_cuboid(
        &mut self,
        name: &str,
        dimensions: Vec3,
        position: Vec3,
        rotation: Option<Vec3>,
    ) -> NodeId {
        self.add_mesh(name, dimensions, position, rotation)
    }

    fn create_group(&mut self, name: &str, position: Vec3) -> NodeId {
        self.add_group(name, position)
    }

    fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.attach(child, parent);
    }

    fn translate(&mut self, node: NodeId, delta: Vec3) {
        SceneGraph::translate(self, node, delta);
    }

    fn set_uv(&mut self, mesh: NodeId, loop_index: usize, uv: (f32, f32)) {
        self.set_loop_uv(mesh, loop_index, uv);
    }

    fn create_material(&mut self, image_bytes: &[u8]) -> Result<MaterialId> {
        Ok(self.add_material(Material::from_image_bytes(image_bytes)?))
    }

    fn assign_material(&mut self, mesh: NodeId, material: MaterialId) {
        self.set_material(mesh, material);
    }

    fn insert_rotation_keyframe(&mut self, node: NodeId, frame: i64, euler: Vec3) {
        self.insert_rotation_key(node, frame, euler);
    }

    fn set_linear_interpolation(&mut self, node: NodeId) {
        self.set_linear(node);
    }
}
