//! Import command

use anyhow::{Context, Result};
use benchpress_import::{load, ImportOptions};
use benchpress_scene::{NodeId, NodeKind, SceneGraph};

pub fn run(path: &str, animations: bool, format: &str) -> Result<()> {
    let options = ImportOptions { animations };
    let mut scene = SceneGraph::new();
    let summary =
        load(path, &mut scene, &options).with_context(|| format!("failed to import {}", path))?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => {
            println!("Imported {}", path);
            println!("  meshes:    {}", summary.meshes);
            println!("  groups:    {}", summary.groups);
            println!("  materials: {}", summary.materials);
            println!("  keyframes: {}", summary.keyframes);
            println!("Scene:");
            for root in scene.roots().collect::<Vec<_>>() {
                print_tree(&scene, root, 1);
            }
        }
    }

    Ok(())
}

fn print_tree(scene: &SceneGraph, id: NodeId, depth: usize) {
    let node = scene.node(id);
    let marker = match node.kind {
        NodeKind::Mesh { .. } => "#",
        NodeKind::Group => "*",
    };
    println!("{:indent$}{} {}", "", marker, node.name, indent = depth * 2);
    for child in &node.children {
        print_tree(scene, *child, depth + 1);
    }
}
