//! 2D shape descriptions

use crate::blend::BlendDesc;
use crate::shape3::ShapeDesc3;
use crate::transform::{TransformDesc2, compose2};
use crate::{Result, SceneError};
use sdforge_core::prelude::*;
use serde::{Deserialize, Serialize};

/// A 2D shape tree in serializable form.
///
/// ```json
/// {
///   "op": "difference",
///   "a": { "op": "box", "size": [4.0, 2.0] },
///   "b": { "op": "circle", "radius": 0.5 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ShapeDesc2 {
    // Primitives
    Circle {
        radius: f64,
    },
    MultiCircle {
        radius: f64,
        positions: Vec<[f64; 2]>,
    },
    Box {
        size: [f64; 2],
        #[serde(default)]
        round: f64,
    },
    Line {
        length: f64,
        #[serde(default)]
        round: f64,
    },
    Polygon {
        vertices: Vec<[f64; 2]>,
    },

    // Boolean operations
    Union {
        shapes: Vec<ShapeDesc2>,
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },
    Difference {
        a: Box<ShapeDesc2>,
        b: Box<ShapeDesc2>,
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },
    Intersection {
        a: Box<ShapeDesc2>,
        b: Box<ShapeDesc2>,
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },

    // Modifiers
    Offset {
        shape: Box<ShapeDesc2>,
        offset: f64,
    },
    Cut {
        shape: Box<ShapeDesc2>,
        point: [f64; 2],
        direction: [f64; 2],
    },

    // Transforms and instancing
    Transform {
        shape: Box<ShapeDesc2>,
        steps: Vec<TransformDesc2>,
    },
    Array {
        shape: Box<ShapeDesc2>,
        count: [u32; 2],
        step: [f64; 2],
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },
    Rotate {
        shape: Box<ShapeDesc2>,
        count: u32,
        step: Vec<TransformDesc2>,
        #[serde(default, skip_serializing_if = "BlendDesc::is_sharp")]
        blend: BlendDesc,
    },
    RotateCopy {
        shape: Box<ShapeDesc2>,
        count: u32,
    },

    // From 3D
    Slice {
        shape: Box<ShapeDesc3>,
        point: [f64; 3],
        normal: [f64; 3],
    },
}

impl ShapeDesc2 {
    /// Build the kernel node tree
    pub fn build(&self) -> Result<Sdf2Node> {
        let node = match self {
            Self::Circle { radius } => circle2d(*radius).into_node(),
            Self::MultiCircle { radius, positions } => {
                multi_circle2d(*radius, to_points(positions))?.into_node()
            }
            Self::Box { size, round } => box2d(DVec2::from_array(*size), *round).into_node(),
            Self::Line { length, round } => line2d(*length, *round).into_node(),
            Self::Polygon { vertices } => polygon2d(to_points(vertices))?.into_node(),

            Self::Union { shapes, blend } => {
                let min = blend.to_min()?;
                let mut nodes = shapes.iter().map(Self::build);
                let first = nodes.next().ok_or(SceneError::EmptyUnion)??;
                nodes.try_fold(first, |acc, node| {
                    Ok::<_, SceneError>(Union2::new(acc, node?).with_min(min).into_node())
                })?
            }
            Self::Difference { a, b, blend } => Difference2::new(a.build()?, b.build()?)
                .with_max(blend.to_max()?)
                .into_node(),
            Self::Intersection { a, b, blend } => Intersection2::new(a.build()?, b.build()?)
                .with_max(blend.to_max()?)
                .into_node(),

            Self::Offset { shape, offset } => shape.build()?.offset(*offset),
            Self::Cut {
                shape,
                point,
                direction,
            } => shape
                .build()?
                .cut(DVec2::from_array(*point), DVec2::from_array(*direction))?,

            Self::Transform { shape, steps } => shape.build()?.transform(compose2(steps))?,
            Self::Array {
                shape,
                count,
                step,
                blend,
            } => Array2::new(
                shape.build()?,
                UVec2::from_array(*count),
                DVec2::from_array(*step),
            )?
            .with_min(blend.to_min()?)
            .into_node(),
            Self::Rotate {
                shape,
                count,
                step,
                blend,
            } => Rotate2::new(shape.build()?, *count, compose2(step))?
                .with_min(blend.to_min()?)
                .into_node(),
            Self::RotateCopy { shape, count } => shape.build()?.rotate_copy(*count)?,

            Self::Slice {
                shape,
                point,
                normal,
            } => shape
                .build()?
                .slice(DVec3::from_array(*point), DVec3::from_array(*normal))?,
        };
        tracing::debug!(op = self.op_name(), bb = ?node.bounding_box(), "built 2D node");
        Ok(node)
    }

    fn op_name(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::MultiCircle { .. } => "multi_circle",
            Self::Box { .. } => "box",
            Self::Line { .. } => "line",
            Self::Polygon { .. } => "polygon",
            Self::Union { .. } => "union",
            Self::Difference { .. } => "difference",
            Self::Intersection { .. } => "intersection",
            Self::Offset { .. } => "offset",
            Self::Cut { .. } => "cut",
            Self::Transform { .. } => "transform",
            Self::Array { .. } => "array",
            Self::Rotate { .. } => "rotate",
            Self::RotateCopy { .. } => "rotate_copy",
            Self::Slice { .. } => "slice",
        }
    }
}

pub(crate) fn to_points(points: &[[f64; 2]]) -> Vec<DVec2> {
    points.iter().copied().map(DVec2::from_array).collect()
}
