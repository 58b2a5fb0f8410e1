//! Outliner tree resolution into parented group nodes

use crate::axes;
use crate::builder::SceneBuilder;
use benchpress_core::{BenchError, Result, Vec3};
use benchpress_model::{OutlineEntry, OutlineNode};
use std::collections::HashMap;

/// Walk the top-level outliner entries, creating and parenting group nodes.
///
/// Only group entries are processed at the root; a bare uuid at the top
/// level creates nothing. Nested uuid leaves ARE reparented — the asymmetry
/// is intentional and must not be leveled without revisiting the format's
/// intent. Returns the number of groups created.
pub fn resolve_outliner<B: SceneBuilder>(
    builder: &mut B,
    entries: &[OutlineEntry],
    registry: &mut HashMap<String, B::Node>,
) -> Result<usize> {
    let mut groups = 0;
    for entry in entries {
        match entry {
            OutlineEntry::Group(node) => {
                resolve_node(builder, node, Vec3::ZERO, registry, &mut groups)?;
            }
            OutlineEntry::Leaf(uuid) => {
                log::debug!("skipping top-level outliner leaf {}", uuid);
            }
        }
    }
    Ok(groups)
}

/// Create the group for one outline node and attach its subtree.
///
/// `parent_origin` accumulates down the recursion (already remapped); the
/// group's local position is its own origin minus the parent's. Leaf meshes
/// carry a world-space position from the cuboid builder, so attaching one
/// re-expresses it as parent-relative by subtracting this group's origin.
fn resolve_node<B: SceneBuilder>(
    builder: &mut B,
    node: &OutlineNode,
    parent_origin: Vec3,
    registry: &mut HashMap<String, B::Node>,
    groups: &mut usize,
) -> Result<B::Node> {
    let origin = axes::remap(&node.origin).ok_or_else(|| {
        BenchError::InvalidGeometry(format!(
            "group {} 'origin' is not a 3-component point",
            node.uuid
        ))
    })?;

    let group = builder.create_group(&node.name, origin - parent_origin);
    *groups += 1;

    for child in &node.children {
        match child {
            OutlineEntry::Group(sub) => {
                let sub_group = resolve_node(builder, sub, origin, registry, groups)?;
                builder.set_parent(sub_group, group);
            }
            OutlineEntry::Leaf(uuid) => {
                let mesh = *registry
                    .get(uuid)
                    .ok_or_else(|| BenchError::MissingReference(uuid.clone()))?;
                builder.set_parent(mesh, group);
                builder.translate(mesh, -origin);
            }
        }
    }

    registry.insert(node.uuid.clone(), group);
    Ok(group)
}
