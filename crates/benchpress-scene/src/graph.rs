//! Scene graph arena

use crate::material::Material;
use benchpress_core::Vec3;
use std::fmt;

/// Stable handle to a node in the graph
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Stable handle to a material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

/// UV loop count of a cuboid mesh: 6 faces, 4 corner-loops each
pub const CUBOID_LOOPS: usize = 24;

/// What a node is
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Cuboid mesh; dimensions are baked into the geometry, so node scale
    /// stays identity and never mixes with rotation
    Mesh {
        dimensions: Vec3,
        uvs: [(f32, f32); CUBOID_LOOPS],
        material: Option<MaterialId>,
    },
    /// Empty transform node
    Group,
}

/// One node in the graph
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    /// Parent-relative once parented; world-space before that
    pub position: Vec3,
    /// Euler radians
    pub rotation: Vec3,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Rotation keyframes committed by the animation pass
    pub keys: Vec<RotationKey>,
    pub interpolation: Interpolation,
}

/// A rotation keyframe at a frame position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationKey {
    pub frame: i64,
    pub euler: Vec3,
}

/// Curve interpolation mode. New tracks start spline-smoothed; the importer
/// forces linear after every keyframe insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    #[default]
    Spline,
    Linear,
}

/// Arena of scene nodes and materials
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    materials: Vec<Material>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cuboid mesh node at a world-space position
    pub fn add_mesh(
        &mut self,
        name: &str,
        dimensions: Vec3,
        position: Vec3,
        rotation: Option<Vec3>,
    ) -> NodeId {
        self.push(Node {
            name: name.to_string(),
            kind: NodeKind::Mesh {
                dimensions,
                uvs: [(0.0, 0.0); CUBOID_LOOPS],
                material: None,
            },
            position,
            rotation: rotation.unwrap_or(Vec3::ZERO),
            parent: None,
            children: Vec::new(),
            keys: Vec::new(),
            interpolation: Interpolation::default(),
        })
    }

    /// Add an empty group node
    pub fn add_group(&mut self, name: &str, position: Vec3) -> NodeId {
        self.push(Node {
            name: name.to_string(),
            kind: NodeKind::Group,
            position,
            rotation: Vec3::ZERO,
            parent: None,
            children: Vec::new(),
            keys: Vec::new(),
            interpolation: Interpolation::default(),
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Look up a node by name; first match wins
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// Nodes without a parent
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeId(i))
    }

    /// Attach `child` under `parent`
    pub fn attach(&mut self, child: NodeId, parent: NodeId) {
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Move a node by `delta` relative to its current position
    pub fn translate(&mut self, id: NodeId, delta: Vec3) {
        let position = self.nodes[id.0].position;
        self.nodes[id.0].position = position + delta;
    }

    /// Position accumulated through the parent chain
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        let node = &self.nodes[id.0];
        match node.parent {
            Some(parent) => self.world_position(parent) + node.position,
            None => node.position,
        }
    }

    /// Set one UV loop on a mesh node; ignored on groups
    pub fn set_loop_uv(&mut self, id: NodeId, loop_index: usize, uv: (f32, f32)) {
        match &mut self.nodes[id.0].kind {
            NodeKind::Mesh { uvs, .. } => uvs[loop_index] = uv,
            NodeKind::Group => {
                log::warn!("ignoring UV assignment on group node {:?}", id)
            }
        }
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Assign a material to a mesh node; ignored on groups
    pub fn set_material(&mut self, id: NodeId, material_id: MaterialId) {
        match &mut self.nodes[id.0].kind {
            NodeKind::Mesh { material, .. } => *material = Some(material_id),
            NodeKind::Group => {
                log::warn!("ignoring material assignment on group node {:?}", id)
            }
        }
    }

    /// Commit a rotation keyframe, keeping keys ordered by frame. A second
    /// key on an existing frame replaces it.
    pub fn insert_rotation_key(&mut self, id: NodeId, frame: i64, euler: Vec3) {
        let keys = &mut self.nodes[id.0].keys;
        match keys.binary_search_by_key(&frame, |k| k.frame) {
            Ok(existing) => keys[existing] = RotationKey { frame, euler },
            Err(slot) => keys.insert(slot, RotationKey { frame, euler }),
        }
    }

    /// Force the node's curves to linear interpolation. Idempotent.
    pub fn set_linear(&mut self, id: NodeId) {
        self.nodes[id.0].interpolation = Interpolation::Linear;
    }
}
