//! Distance-field sampling on regular lattices
//!
//! Uses Rayon to evaluate every lattice point in parallel. Shape trees are
//! immutable and `Send + Sync`, so one tree is shared by all workers without
//! locking.

use crate::geometry::{Box2, Box3, DVec2, DVec3};
use crate::sdf::{Sdf2, Sdf3};
use crate::{Error, Result};
use glam::{UVec2, UVec3};
use rayon::prelude::*;

/// Configuration for lattice sampling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleConfig {
    /// Number of cells along each axis; the lattice has one more point
    pub resolution: u32,
    /// Margin added around the shape's bounding box
    pub padding: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            resolution: 32,
            padding: 0.0,
        }
    }
}

impl SampleConfig {
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    fn points_per_axis(&self) -> Result<u32> {
        if self.resolution == 0 {
            return Err(Error::InvalidParameter(
                "sample resolution must be positive".to_string(),
            ));
        }
        Ok(self.resolution + 1)
    }
}

/// Signed distances on a 2D lattice, row-major with `x` varying fastest
#[derive(Debug, Clone)]
pub struct DistanceGrid2 {
    pub origin: DVec2,
    pub step: DVec2,
    pub dims: UVec2,
    pub values: Vec<f64>,
}

impl DistanceGrid2 {
    pub fn get(&self, i: u32, j: u32) -> Option<f64> {
        if i >= self.dims.x || j >= self.dims.y {
            return None;
        }
        let idx = j as usize * self.dims.x as usize + i as usize;
        self.values.get(idx).copied()
    }

    /// Position of lattice point `(i, j)`
    pub fn point(&self, i: u32, j: u32) -> DVec2 {
        self.origin + UVec2::new(i, j).as_dvec2() * self.step
    }

    /// Number of lattice points inside or on the shape
    pub fn inside_count(&self) -> usize {
        self.values.iter().filter(|&&d| d <= 0.0).count()
    }
}

/// Signed distances on a 3D lattice, `x` fastest then `y` then `z`
#[derive(Debug, Clone)]
pub struct DistanceGrid3 {
    pub origin: DVec3,
    pub step: DVec3,
    pub dims: UVec3,
    pub values: Vec<f64>,
}

impl DistanceGrid3 {
    pub fn get(&self, i: u32, j: u32, k: u32) -> Option<f64> {
        if i >= self.dims.x || j >= self.dims.y || k >= self.dims.z {
            return None;
        }
        let (nx, ny) = (self.dims.x as usize, self.dims.y as usize);
        let idx = (k as usize * ny + j as usize) * nx + i as usize;
        self.values.get(idx).copied()
    }

    /// Position of lattice point `(i, j, k)`
    pub fn point(&self, i: u32, j: u32, k: u32) -> DVec3 {
        self.origin + UVec3::new(i, j, k).as_dvec3() * self.step
    }

    /// Number of lattice points inside or on the shape
    pub fn inside_count(&self) -> usize {
        self.values.iter().filter(|&&d| d <= 0.0).count()
    }
}

/// Sample a 2D shape over its padded bounding box
pub fn sample_grid2<S: Sdf2 + ?Sized>(sdf: &S, config: SampleConfig) -> Result<DistanceGrid2> {
    let n = config.points_per_axis()?;
    let bounds: Box2 = sdf.bounding_box().enlarge(config.padding);
    let step = bounds.size() / f64::from(config.resolution);
    let dims = UVec2::splat(n);
    let width = n as usize;
    tracing::debug!(points = width * width, ?bounds, "sampling 2D field");

    let values = (0..width * width)
        .into_par_iter()
        .map(|idx| {
            let ij = DVec2::new((idx % width) as f64, (idx / width) as f64);
            sdf.evaluate(bounds.min + ij * step)
        })
        .collect();

    Ok(DistanceGrid2 {
        origin: bounds.min,
        step,
        dims,
        values,
    })
}

/// Sample a 3D shape over its padded bounding box
pub fn sample_grid3<S: Sdf3 + ?Sized>(sdf: &S, config: SampleConfig) -> Result<DistanceGrid3> {
    let n = config.points_per_axis()?;
    let bounds: Box3 = sdf.bounding_box().enlarge(config.padding);
    let step = bounds.size() / f64::from(config.resolution);
    let dims = UVec3::splat(n);
    let width = n as usize;
    tracing::debug!(points = width * width * width, ?bounds, "sampling 3D field");

    let values: Vec<f64> = (0..width * width * width)
        .into_par_iter()
        .map(|idx| {
            let ijk = DVec3::new(
                (idx % width) as f64,
                ((idx / width) % width) as f64,
                (idx / (width * width)) as f64,
            );
            sdf.evaluate(bounds.min + ijk * step)
        })
        .collect();
    tracing::info!(
        total = values.len(),
        inside = values.iter().filter(|&&d| d <= 0.0).count(),
        "sampled 3D field"
    );

    Ok(DistanceGrid3 {
        origin: bounds.min,
        step,
        dims,
        values,
    })
}
