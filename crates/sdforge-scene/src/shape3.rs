//! 3D shape descriptions

use crate::blend::BlendDesc;
use crate::shape2::{ShapeDesc2, to_points};
use crate::transform::{TransformDesc3, compose3};
use crate::{Result, SceneError};
use sdforge_core::prelude::*;
use serde::{Deserialize, Serialize};

/// A 3D shape tree in serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ShapeDesc3 {
    // Primitives
    Sphere {
        radius: f64,
    },
    Box {
        size: [f64; 3],
        #[serde(default)]
        round: f64,
    },
    Cylinder {
        height: f64,
        radius: f64,
        #[serde(default)]
        round: f64,
    },
    Capsule {
        radius: f64,
        height: f64,
    },
    MultiCylinder {
        height: f64,
        radius: f64,
        positions: Vec<[f64; 2]>,
    },

    // Boolean operations
    Union {
        shapes: Vec<ShapeDesc3>,
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },
    Difference {
        a: Box<ShapeDesc3>,
        b: Box<ShapeDesc3>,
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },
    Intersection {
        a: Box<ShapeDesc3>,
        b: Box<ShapeDesc3>,
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },

    // Modifiers
    Offset {
        shape: Box<ShapeDesc3>,
        offset: f64,
    },

    // Transforms and instancing
    Transform {
        shape: Box<ShapeDesc3>,
        steps: Vec<TransformDesc3>,
    },
    Array {
        shape: Box<ShapeDesc3>,
        count: [u32; 3],
        step: [f64; 3],
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },
    Rotate {
        shape: Box<ShapeDesc3>,
        count: u32,
        step: Vec<TransformDesc3>,
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },

    // From 2D
    Extrude {
        profile: Box<ShapeDesc2>,
        height: f64,
    },
    /// Revolve around Z; a missing `theta` is a full turn
    Revolve {
        profile: Box<ShapeDesc2>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        theta: Option<f64>,
    },
}

impl ShapeDesc3 {
    /// Build the kernel node tree
    pub fn build(&self) -> Result<Sdf3Node> {
        let node = match self {
            Self::Sphere { radius } => sphere3d(*radius).into_node(),
            Self::Box { size, round } => box3d(DVec3::from_array(*size), *round).into_node(),
            Self::Cylinder {
                height,
                radius,
                round,
            } => cylinder3d(*height, *radius, *round).into_node(),
            Self::Capsule { radius, height } => capsule3d(*radius, *height).into_node(),
            Self::MultiCylinder {
                height,
                radius,
                positions,
            } => multi_cylinder3d(*height, *radius, to_points(positions))?.into_node(),

            Self::Union { shapes, blend } => {
                let min = blend.to_min()?;
                let mut nodes = shapes.iter().map(Self::build);
                let first = nodes.next().ok_or(SceneError::EmptyUnion)??;
                nodes.try_fold(first, |acc, node| {
                    Ok::<_, SceneError>(Union3::new(acc, node?).with_min(min).into_node())
                })?
            }
            Self::Difference { a, b, blend } => Difference3::new(a.build()?, b.build()?)
                .with_max(blend.to_max()?)
                .into_node(),
            Self::Intersection { a, b, blend } => Intersection3::new(a.build()?, b.build()?)
                .with_max(blend.to_max()?)
                .into_node(),

            Self::Offset { shape, offset } => shape.build()?.offset(*offset),

            Self::Transform { shape, steps } => shape.build()?.transform(compose3(steps)?)?,
            Self::Array {
                shape,
                count,
                step,
                blend,
            } => Array3::new(
                shape.build()?,
                UVec3::from_array(*count),
                DVec3::from_array(*step),
            )?
            .with_min(blend.to_min()?)
            .into_node(),
            Self::Rotate {
                shape,
                count,
                step,
                blend,
            } => Rotate3::new(shape.build()?, *count, compose3(step)?)?
                .with_min(blend.to_min()?)
                .into_node(),

            Self::Extrude { profile, height } => profile.build()?.extrude(*height)?,
            Self::Revolve { profile, theta } => match theta {
                Some(theta) => profile.build()?.revolve_theta(*theta)?,
                None => profile.build()?.revolve(),
            },
        };
        tracing::debug!(op = self.op_name(), bb = ?node.bounding_box(), "built 3D node");
        Ok(node)
    }

    fn op_name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Box { .. } => "box",
            Self::Cylinder { .. } => "cylinder",
            Self::Capsule { .. } => "capsule",
            Self::MultiCylinder { .. } => "multi_cylinder",
            Self::Union { .. } => "union",
            Self::Difference { .. } => "difference",
            Self::Intersection { .. } => "intersection",
            Self::Offset { .. } => "offset",
            Self::Transform { .. } => "transform",
            Self::Array { .. } => "array",
            Self::Rotate { .. } => "rotate",
            Self::Extrude { .. } => "extrude",
            Self::Revolve { .. } => "revolve",
        }
    }
}
