//! Face UV mapping against the shared texture atlas

use crate::builder::SceneBuilder;
use benchpress_core::{BenchError, Result};
use benchpress_model::{Element, Resolution};

/// Canonical face order; mesh loops `4*i..4*i+3` belong to `FACE_ORDER[i]`
pub const FACE_ORDER: [&str; 6] = ["north", "east", "south", "west", "down", "up"];

const LOOPS_PER_FACE: usize = 4;

/// Assign all 24 corner-loop UVs for one mesh.
///
/// Face rects are pixel-space `[u0, v0, u1, v1]` on the atlas; they are
/// normalized by the document resolution and v-flipped (image-space top-left
/// origin to texture-space bottom-left origin).
pub fn map_uvs<B: SceneBuilder>(
    builder: &mut B,
    mesh: B::Node,
    element: &Element,
    resolution: &Resolution,
) -> Result<()> {
    for (face_index, face_name) in FACE_ORDER.iter().enumerate() {
        let face = element.faces.get(*face_name).ok_or_else(|| {
            BenchError::MissingFaceData {
                element: element.uuid.clone(),
                face: (*face_name).to_string(),
            }
        })?;
        let corners = face_corners(face.uv, resolution);
        for (corner, uv) in corners.into_iter().enumerate() {
            builder.set_uv(mesh, face_index * LOOPS_PER_FACE + corner, uv);
        }
    }
    Ok(())
}

/// The four corner UVs of one face, in loop order.
///
/// `top_left` pairs the max-u coordinate with the flipped min-v coordinate.
/// The pairing is load-bearing for texture orientation; changing it mirrors
/// every face.
fn face_corners(rect: [f64; 4], resolution: &Resolution) -> [(f32, f32); 4] {
    let width = resolution.width as f64;
    let height = resolution.height as f64;

    let top_left = ((rect[2] / width) as f32, (1.0 - rect[1] / height) as f32);
    let bottom_right = ((rect[0] / width) as f32, (1.0 - rect[3] / height) as f32);

    [
        (top_left.0, bottom_right.1),
        top_left,
        (bottom_right.0, top_left.1),
        bottom_right,
    ]
}
