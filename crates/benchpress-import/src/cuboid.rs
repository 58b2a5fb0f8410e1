//! Per-element cuboid construction

use crate::axes;
use crate::builder::SceneBuilder;
use benchpress_core::{BenchError, Result, Vec3};
use benchpress_model::Element;

/// Resolved placement of one cuboid, ready to hand to a builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidParts {
    /// Box size per scene axis, baked into the mesh at creation
    pub dimensions: Vec3,
    /// World position: pivot offset plus the box's own center
    pub position: Vec3,
    /// Euler radians, kept separate from the baked scale
    pub rotation: Option<Vec3>,
}

/// Compute dimensions, position, and rotation for one element.
///
/// Dimensions are the component-wise absolute difference of the corners, the
/// geometric center sits at `from + dimensions / 2`, and the world position
/// adds the pivot on top of that center.
pub fn cuboid_parts(element: &Element) -> Result<CuboidParts> {
    let from = corner(element, element.from.as_deref(), "from")?;
    let to = corner(element, element.to.as_deref(), "to")?;
    let origin = axes::remap(&element.origin).ok_or_else(|| {
        BenchError::InvalidGeometry(format!(
            "element {} 'origin' is not a 3-component point",
            element.uuid
        ))
    })?;

    let dimensions = (to - from).abs();
    let center = from + dimensions * 0.5;
    let position = origin + center;

    let rotation = match &element.rotation {
        Some(degrees) => Some(axes::remap_degrees(degrees).ok_or_else(|| {
            BenchError::InvalidGeometry(format!(
                "element {} 'rotation' is not a 3-component triple",
                element.uuid
            ))
        })?),
        None => None,
    };

    Ok(CuboidParts {
        dimensions,
        position,
        rotation,
    })
}

/// Create the cuboid mesh for an element through the builder
pub fn build_cuboid<B: SceneBuilder>(builder: &mut B, element: &Element) -> Result<B::Node> {
    let parts = cuboid_parts(element)?;
    log::debug!(
        "cuboid {} dims ({}, {}, {}) at ({}, {}, {})",
        element.uuid,
        parts.dimensions.x,
        parts.dimensions.y,
        parts.dimensions.z,
        parts.position.x,
        parts.position.y,
        parts.position.z
    );
    Ok(builder.create_cuboid(
        element.display_name(),
        parts.dimensions,
        parts.position,
        parts.rotation,
    ))
}

fn corner(element: &Element, value: Option<&[f64]>, key: &str) -> Result<Vec3> {
    value
        .and_then(axes::remap)
        .ok_or_else(|| {
            BenchError::InvalidGeometry(format!(
                "element {} '{}' is missing or not a 3-component point",
                element.uuid, key
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(json: &str) -> Element {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn dimensions_follow_axis_permutation() {
        let e = element(r#"{ "uuid": "e", "from": [0, 0, 0], "to": [2, 4, 6] }"#);
        let parts = cuboid_parts(&e).unwrap();
        // document axis 2 -> X, axis 0 -> Y, axis 1 -> Z
        assert_eq!(parts.dimensions, Vec3::new(6.0, 2.0, 4.0));
    }

    #[test]
    fn position_is_pivot_plus_center() {
        let e = element(
            r#"{ "uuid": "e", "from": [0, 0, 0], "to": [2, 2, 2], "origin": [1, 1, 1] }"#,
        );
        let parts = cuboid_parts(&e).unwrap();
        assert_eq!(parts.position, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn dimensions_ignore_corner_order() {
        let e = element(r#"{ "uuid": "e", "from": [5, 1, 3], "to": [1, 5, 1] }"#);
        let parts = cuboid_parts(&e).unwrap();
        assert_eq!(parts.dimensions, Vec3::new(2.0, 4.0, 4.0));
    }

    #[test]
    fn rotation_remapped_in_radians() {
        let e = element(
            r#"{ "uuid": "e", "from": [0, 0, 0], "to": [1, 1, 1], "rotation": [90, 0, 45] }"#,
        );
        let rotation = cuboid_parts(&e).unwrap().rotation.unwrap();
        assert!((rotation.x - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert!((rotation.y - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(rotation.z, 0.0);
    }

    #[test]
    fn missing_from_is_invalid_geometry() {
        let e = element(r#"{ "uuid": "e", "to": [1, 1, 1] }"#);
        assert!(matches!(
            cuboid_parts(&e),
            Err(BenchError::InvalidGeometry(msg)) if msg.contains("'from'")
        ));
    }

    #[test]
    fn short_corner_is_invalid_geometry() {
        let e = element(r#"{ "uuid": "e", "from": [0, 0, 0], "to": [1, 1] }"#);
        assert!(matches!(
            cuboid_parts(&e),
            Err(BenchError::InvalidGeometry(_))
        ));
    }
}
