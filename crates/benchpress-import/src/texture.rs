//! Texture staging and material creation

use crate::builder::SceneBuilder;
use benchpress_core::Result;
use benchpress_model::Texture;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Single staging file shared by every texture in a document.
///
/// Each texture overwrites the previous payload. The file exists for hosts
/// that load images from a path rather than from memory; one path serves
/// the whole import, so after the texture pass only the last image is still
/// on disk. Removed on drop.
pub struct TextureStage {
    file: NamedTempFile,
}

impl TextureStage {
    pub fn new() -> Result<Self> {
        Ok(Self {
            file: NamedTempFile::new()?,
        })
    }

    /// Path of the shared staging file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Replace the staged payload
    pub fn stage(&mut self, bytes: &[u8]) -> Result<()> {
        let file = self.file.as_file_mut();
        file.seek(SeekFrom::Start(0))?;
        file.set_len(0)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }
}

/// Decode and stage each texture, creating one material per texture.
///
/// Only the last material's handle is returned; it backs every mesh in the
/// import. Earlier materials exist in the scene but their image has been
/// overwritten in the shared staging file — a known limitation carried
/// forward deliberately.
pub fn build_materials<B: SceneBuilder>(
    builder: &mut B,
    stage: &mut TextureStage,
    textures: &[Texture],
) -> Result<Option<B::Material>> {
    let mut last = None;
    for texture in textures {
        let bytes = texture.decode_source()?;
        stage.stage(&bytes)?;
        log::debug!(
            "staged texture '{}' ({} bytes) at {}",
            texture.name.as_deref().unwrap_or("unnamed"),
            bytes.len(),
            stage.path().display()
        );
        last = Some(builder.create_material(&bytes)?);
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBuilder;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    fn texture(name: &str, payload: &[u8]) -> Texture {
        let json = format!(
            r#"{{ "name": "{}", "source": "data:image/png;base64,{}" }}"#,
            name,
            STANDARD.encode(payload)
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn staging_overwrites_previous_payload() {
        let mut stage = TextureStage::new().unwrap();
        stage.stage(b"first payload, longer").unwrap();
        stage.stage(b"second").unwrap();
        let on_disk = std::fs::read(stage.path()).unwrap();
        assert_eq!(on_disk, b"second");
    }

    #[test]
    fn last_material_wins() {
        let textures = vec![texture("a", b"aaaa"), texture("b", b"bbbbbb")];
        let mut builder = RecordingBuilder::new();
        let mut stage = TextureStage::new().unwrap();

        let material = build_materials(&mut builder, &mut stage, &textures).unwrap();
        // both materials exist, only the second is handed back
        assert_eq!(builder.materials.len(), 2);
        assert_eq!(material, Some(1));
        assert_eq!(std::fs::read(stage.path()).unwrap(), b"bbbbbb");
    }

    #[test]
    fn no_textures_no_material() {
        let mut builder = RecordingBuilder::new();
        let mut stage = TextureStage::new().unwrap();
        let material = build_materials(&mut builder, &mut stage, &[]).unwrap();
        assert!(material.is_none());
        assert!(builder.materials.is_empty());
    }

    #[test]
    fn bad_data_uri_aborts() {
        let textures = vec![Texture {
            name: None,
            source: "not a data uri".to_string(),
        }];
        let mut builder = RecordingBuilder::new();
        let mut stage = TextureStage::new().unwrap();
        assert!(build_materials(&mut builder, &mut stage, &textures).is_err());
    }
}
