//! Animation clip definitions

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// A named animation clip with per-node animators
#[derive(Debug, Clone, Deserialize)]
pub struct Animation {
    #[serde(default)]
    pub name: Option<String>,
    /// Keyed by the uuid of the mesh or group the animator drives
    #[serde(default)]
    pub animators: BTreeMap<String, Animator>,
}

/// Keyframe list targeting one scene node
#[derive(Debug, Clone, Deserialize)]
pub struct Animator {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

/// A single keyframe
#[derive(Debug, Clone, Deserialize)]
pub struct Keyframe {
    /// Time in seconds from clip start
    pub time: f64,
    /// Animated channel; only "rotation" is applied on import
    pub channel: String,
    /// Value samples; the importer reads the first entry
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
}

/// One value sample. Blockbench writes the components as JSON numbers or as
/// numeric strings depending on how the value was entered in the editor.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DataPoint {
    #[serde(default, deserialize_with = "number_or_string")]
    pub x: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub y: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub z: f64,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("non-numeric data point '{}'", s))),
    }
}
