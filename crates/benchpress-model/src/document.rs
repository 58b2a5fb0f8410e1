//! Document root and parsing entry points

use crate::animation::Animation;
use crate::data_uri::decode_data_uri;
use crate::element::Element;
use crate::outline::OutlineEntry;
use benchpress_core::{BenchError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Root structure of a `.bbmodel` file
///
/// Parsed once, then read-only. Keys not listed here (box_uv flags, display
/// settings, editor state) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub resolution: Option<Resolution>,
    #[serde(default)]
    pub textures: Vec<Texture>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub outliner: Vec<OutlineEntry>,
    #[serde(default)]
    pub animations: Vec<Animation>,
}

/// File metadata block written by the Blockbench editor
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub format_version: Option<String>,
    #[serde(default)]
    pub model_format: Option<String>,
}

/// Pixel dimensions of the shared texture atlas
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// A texture entry with its image payload inlined as a data URI
#[derive(Debug, Clone, Deserialize)]
pub struct Texture {
    #[serde(default)]
    pub name: Option<String>,
    pub source: String,
}

impl Texture {
    /// Decode the data-URI `source` field into raw image bytes
    pub fn decode_source(&self) -> Result<Vec<u8>> {
        decode_data_uri(&self.source)
    }
}

impl Document {
    /// Parse a document from raw file bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| BenchError::MalformedDocument(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Parse a document from a JSON string
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_slice(text.as_bytes())
    }

    /// Read and parse a document from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_slice(&bytes)
    }

    fn from_value(value: serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            BenchError::MalformedDocument("top-level value is not an object".to_string())
        })?;

        // serde defaults would silently accept a document without these keys,
        // so check the raw object before deserializing.
        for key in ["elements", "outliner"] {
            if !object.contains_key(key) {
                return Err(BenchError::MalformedDocument(format!(
                    "missing required key '{}'",
                    key
                )));
            }
        }

        let document: Document = serde_json::from_value(value)
            .map_err(|e| BenchError::MalformedDocument(e.to_string()))?;
        document.validate()?;
        Ok(document)
    }

    /// Structural checks that serde cannot express
    fn validate(&self) -> Result<()> {
        let any_faces = self.elements.iter().any(|e| !e.faces.is_empty());
        if any_faces && self.resolution.is_none() {
            return Err(BenchError::MalformedDocument(
                "missing 'resolution' while elements carry face UVs".to_string(),
            ));
        }
        Ok(())
    }
}
