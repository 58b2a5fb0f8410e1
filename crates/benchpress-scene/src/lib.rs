//! Benchpress Scene - in-memory scene graph
//!
//! The reference host for the import pipeline: an arena of mesh and group
//! nodes with parent links, materials decoded from staged texture payloads,
//! and per-node rotation keyframe tracks. A real editor integration would
//! implement `SceneBuilder` the same way this crate does, as a thin shim
//! over its own node types.

mod graph;
mod host;
mod material;

pub use graph::{
    Interpolation, MaterialId, Node, NodeId, NodeKind, RotationKey, SceneGraph, CUBOID_LOOPS,
};
pub use material::Material;
