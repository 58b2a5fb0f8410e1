//! Benchpress Model - the `.bbmodel` document format
//!
//! This crate owns the serde representation of a Blockbench model file and
//! the parsing/validation entry points. A `Document` is parsed once and read
//! only; all geometry interpretation lives in `benchpress-import`.

mod animation;
mod data_uri;
mod document;
mod element;
mod outline;

pub use animation::{Animation, Animator, DataPoint, Keyframe};
pub use data_uri::decode_data_uri;
pub use document::{Document, Meta, Resolution, Texture};
pub use element::{Element, Face};
pub use outline::{OutlineEntry, OutlineNode};
