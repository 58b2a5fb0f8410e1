//! Rotation keyframe replay onto resolved scene nodes

use crate::builder::SceneBuilder;
use benchpress_core::{BenchError, Result, Vec3};
use benchpress_model::{Animation, DataPoint, Keyframe};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Fixed playback rate keyframe times are quantized against
pub const FRAMES_PER_SECOND: f64 = 24.0;

/// Replay every animator's keyframes onto its registry node.
///
/// Animators address meshes and groups through the same uuid namespace the
/// hierarchy pass filled in. Returns the number of keyframes inserted.
pub fn apply_animations<B: SceneBuilder>(
    builder: &mut B,
    animations: &[Animation],
    registry: &HashMap<String, B::Node>,
) -> Result<usize> {
    let mut inserted = 0;
    for animation in animations {
        for (uuid, animator) in &animation.animators {
            let node = *registry
                .get(uuid)
                .ok_or_else(|| BenchError::MissingReference(uuid.clone()))?;

            let mut keyframes: Vec<&Keyframe> = animator.keyframes.iter().collect();
            keyframes.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));

            for keyframe in keyframes {
                let frame = (keyframe.time * FRAMES_PER_SECOND).round() as i64;
                if keyframe.channel != "rotation" {
                    continue;
                }
                let point = keyframe.data_points.first().ok_or_else(|| {
                    BenchError::MalformedDocument(format!(
                        "rotation keyframe at {}s has no data points",
                        keyframe.time
                    ))
                })?;
                builder.insert_rotation_keyframe(node, frame, keyframe_euler(point));
                inserted += 1;
                // Re-applied after every insert; idempotent on curves that
                // are already linear.
                builder.set_linear_interpolation(node);
            }
        }
    }
    Ok(inserted)
}

/// Keyframe axis remap: data point z,x,y land on scene x,y,z.
///
/// This differs from the geometry remap and must stay that way.
fn keyframe_euler(point: &DataPoint) -> Vec3 {
    Vec3::new(
        (point.z as f32).to_radians(),
        (point.x as f32).to_radians(),
        (point.y as f32).to_radians(),
    )
}
