//! sdforge scene - serializable shape descriptions
//!
//! A scene is a tree of plain data describing primitives, combinators and
//! their parameters, blend settings included. It round-trips through JSON
//! and is turned into kernel nodes with `build()`.
//!
//! ## Key Types
//!
//! - [`ShapeDesc2`] / [`ShapeDesc3`] - Shape trees, tagged by `"op"`
//! - [`BlendDesc`] - Blend settings, tagged by `"kind"`
//! - [`TransformDesc2`] / [`TransformDesc3`] - Transform steps, tagged by `"kind"`
//!
//! ## Example
//!
//! ```rust
//! use sdforge_core::prelude::*;
//! use sdforge_scene::ShapeDesc3;
//!
//! let json = r#"{
//!     "op": "extrude",
//!     "height": 1.0,
//!     "profile": {
//!         "op": "difference",
//!         "a": { "op": "box", "size": [4.0, 2.0] },
//!         "b": { "op": "circle", "radius": 0.5 }
//!     }
//! }"#;
//!
//! let plate = ShapeDesc3::from_json_str(json)?.build()?;
//! assert!(plate.evaluate(DVec3::new(1.5, 0.0, 0.5)) < 0.0);
//! assert!(plate.evaluate(DVec3::new(0.0, 0.0, 0.5)) > 0.0);
//! # Ok::<(), sdforge_scene::SceneError>(())
//! ```

mod blend;
mod error;
mod shape2;
mod shape3;
mod transform;

pub use blend::BlendDesc;
pub use error::{Result, SceneError};
pub use shape2::ShapeDesc2;
pub use shape3::ShapeDesc3;
pub use transform::{TransformDesc2, TransformDesc3, compose2, compose3};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

// ============================================================================
// JSON loading and saving
// ============================================================================

fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

fn from_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    let desc = from_json_str(&contents)?;
    tracing::info!(path = %path.display(), "loaded scene");
    Ok(desc)
}

fn to_json_string<T: Serialize>(desc: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(desc)?)
}

impl ShapeDesc2 {
    pub fn from_json_str(json: &str) -> Result<Self> {
        from_json_str(json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        from_json_file(path.as_ref())
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        to_json_string(self)
    }
}

impl ShapeDesc3 {
    pub fn from_json_str(json: &str) -> Result<Self> {
        from_json_str(json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        from_json_file(path.as_ref())
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        to_json_string(self)
    }
}
