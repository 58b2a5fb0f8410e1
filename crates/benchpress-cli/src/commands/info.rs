//! Info command

use anyhow::{Context, Result};
use benchpress_model::Document;

pub fn run(path: &str) -> Result<()> {
    let document =
        Document::from_file(path).with_context(|| format!("failed to read {}", path))?;

    println!(
        "name:           {}",
        document.name.as_deref().unwrap_or("(unnamed)")
    );
    if let Some(meta) = &document.meta {
        if let Some(version) = &meta.format_version {
            println!("format version: {}", version);
        }
    }
    match document.resolution {
        Some(res) => println!("resolution:     {}x{}", res.width, res.height),
        None => println!("resolution:     (none)"),
    }
    println!("textures:       {}", document.textures.len());
    let visible = document.elements.iter().filter(|e| e.visibility).count();
    println!(
        "elements:       {} ({} visible)",
        document.elements.len(),
        visible
    );
    println!("animations:     {}", document.animations.len());

    Ok(())
}
