//! Outliner tree definitions

use serde::Deserialize;

/// One entry in the outliner tree
///
/// Blockbench stores children as either a nested group object or a bare
/// element uuid string, so this deserializes untagged.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OutlineEntry {
    Group(OutlineNode),
    Leaf(String),
}

/// A group node in the outliner tree
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineNode {
    pub uuid: String,
    #[serde(default = "unnamed_group")]
    pub name: String,
    #[serde(default = "zero_triple")]
    pub origin: Vec<f64>,
    #[serde(default)]
    pub children: Vec<OutlineEntry>,
}

fn unnamed_group() -> String {
    "group".to_string()
}

fn zero_triple() -> Vec<f64> {
    vec![0.0, 0.0, 0.0]
}
