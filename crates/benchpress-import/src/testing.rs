//! Recording `SceneBuilder` stub for pipeline tests

use crate::builder::SceneBuilder;
use benchpress_core::{Result, Vec3};

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Cuboid {
        dimensions: Vec3,
        rotation: Option<Vec3>,
    },
    Group,
}

#[derive(Debug, Clone)]
pub struct RecordedNode {
    pub name: String,
    pub kind: NodeKind,
    pub position: Vec3,
    pub parent: Option<usize>,
    pub uvs: Vec<(usize, (f32, f32))>,
    pub material: Option<usize>,
    pub keyframes: Vec<(i64, Vec3)>,
    pub linear_passes: usize,
}

/// Records every builder call; node and material handles are plain indices
#[derive(Default)]
pub struct RecordingBuilder {
    pub nodes: Vec<RecordedNode>,
    /// Byte length of each created material's image payload
    pub materials: Vec<usize>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> usize {
        self.nodes
            .iter()
            .position(|n| n.name == name)
            .unwrap_or_else(|| panic!("no recorded node named '{}'", name))
    }

    fn push(&mut self, name: &str, kind: NodeKind, position: Vec3) -> usize {
        self.nodes.push(RecordedNode {
            name: name.to_string(),
            kind,
            position,
            parent: None,
            uvs: Vec::new(),
            material: None,
            keyframes: Vec::new(),
            linear_passes: 0,
        });
        self.nodes.len() - 1
    }
}

impl SceneBuilder for RecordingBuilder {
    type Node = usize;
    type Material = usize;

    fn create_cuboid(
        &mut self,
        name: &str,
        dimensions: Vec3,
        position: Vec3,
        rotation: Option<Vec3>,
    ) -> usize {
        self.push(
            name,
            NodeKind::Cuboid {
                dimensions,
                rotation,
            },
            position,
        )
    }

    fn create_group(&mut self, name: &str, position: Vec3) -> usize {
        self.push(name, NodeKind::Group, position)
    }

    fn set_parent(&mut self, child: usize, parent: usize) {
        self.nodes[child].parent = Some(parent);
    }

    fn translate(&mut self, node: usize, delta: Vec3) {
        let position = self.nodes[node].position;
        self.nodes[node].position = position + delta;
    }

    fn set_uv(&mut self, mesh: usize, loop_index: usize, uv: (f32, f32)) {
        self.nodes[mesh].uvs.push((loop_index, uv));
    }

    fn create_material(&mut self, image_bytes: &[u8]) -> Result<usize> {
        self.materials.push(image_bytes.len());
        Ok(self.materials.len() - 1)
    }

    fn assign_material(&mut self, mesh: usize, material: usize) {
        self.nodes[mesh].material = Some(material);
    }

    fn insert_rotation_keyframe(&mut self, node: usize, frame: i64, euler: Vec3) {
        self.nodes[node].keyframes.push((frame, euler));
    }

    fn set_linear_interpolation(&mut self, node: usize) {
        self.nodes[node].linear_passes += 1;
    }
}
