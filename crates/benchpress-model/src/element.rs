//! Cuboid element definitions

use serde::Deserialize;
use std::collections::BTreeMap;

/// A single cuboid element
///
/// `from`/`to` are opposite corners in the document's coordinate system.
/// They stay unvalidated `Option<Vec<f64>>` here; the cuboid builder owns
/// the 3-component check so a bad element reports `InvalidGeometry` rather
/// than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub from: Option<Vec<f64>>,
    #[serde(default)]
    pub to: Option<Vec<f64>>,
    /// Pivot point; Blockbench writes one for every element
    #[serde(default = "zero_triple")]
    pub origin: Vec<f64>,
    #[serde(default)]
    pub rotation: Option<Vec<f64>>,
    #[serde(default = "default_visibility")]
    pub visibility: bool,
    #[serde(default)]
    pub faces: BTreeMap<String, Face>,
}

/// Per-face pixel-space UV rectangle `[u0, v0, u1, v1]` on the shared atlas
#[derive(Debug, Clone, Deserialize)]
pub struct Face {
    pub uv: [f64; 4],
    /// Texture index; parsed but unused (a single shared material backs all
    /// faces)
    #[serde(default)]
    pub texture: Option<i64>,
}

fn zero_triple() -> Vec<f64> {
    vec![0.0, 0.0, 0.0]
}

fn default_visibility() -> bool {
    true
}

impl Element {
    /// Display name for scene nodes; uuid when the file carries no name
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.uuid)
    }
}
