//! # sdforge core
//!
//! Implicit-surface modeling with signed distance functions.
//!
//! Shapes are expression trees of primitives and combinators. Evaluating a
//! tree at a point gives the signed distance to the composite shape:
//! negative inside, zero on the surface, positive outside. Every node also
//! carries a bounding box that contains its whole interior.
//!
//! ## Quick Start
//!
//! ```rust
//! use sdforge_core::prelude::*;
//!
//! // A flange: a disc with six bolt holes, extruded 0.5 units
//! let hole = circle2d(0.2).translate(DVec2::new(1.5, 0.0));
//! let flange = circle2d(2.0)
//!     .difference(hole.rotate_copy(6)?)
//!     .extrude(0.5)?;
//!
//! assert!(flange.evaluate(DVec3::new(0.0, 0.0, 0.25)) < 0.0);
//! assert!(flange.evaluate(DVec3::new(-1.5, 0.0, 0.25)) > 0.0);
//!
//! // Sample the field in parallel
//! let grid = sample_grid3(&flange, SampleConfig::default().with_resolution(16))?;
//! assert!(grid.inside_count() > 0);
//! # Ok::<(), sdforge_core::Error>(())
//! ```
//!
//! ## Units and Conventions
//!
//! - **Distances**: Arbitrary units
//! - **Angles**: All rotation functions use **radians**, counter-clockwise
//! - **Precision**: `f64` throughout
//! - **Coordinate system**: Right-handed, Z-up; extrusion and revolution
//!   both build along Z

pub mod blend;
pub mod geometry;
pub mod sample;
pub mod sdf;

mod error;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    // SDF nodes and builders
    pub use crate::sdf::{
        Sdf2, Sdf2Ext, Sdf2Node, Sdf3, Sdf3Ext, Sdf3Node, bridges::*, operations::*,
        primitives2d::*, primitives3d::*, transforms::*,
    };

    // Blends
    pub use crate::blend::{MaxBlend, MinBlend};

    // Geometry
    pub use crate::geometry::*;

    // Sampling
    pub use crate::sample::{DistanceGrid2, DistanceGrid3, SampleConfig, sample_grid2, sample_grid3};

    // Math (re-export glam)
    pub use glam::{UVec2, UVec3};

    // Error handling
    pub use crate::{Error, Result};
}
