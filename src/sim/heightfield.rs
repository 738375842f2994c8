//! Terrain altitude grid
//!
//! Each unit cell is split into two triangles along the diagonal running
//! from `(x+1, z)` to `(x, z+1)`, the same split the terrain mesh is drawn
//! with. Altitudes between grid points are interpolated on those triangles.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A `width x depth` grid of altitudes plus the sun direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightField {
    width: usize,
    depth: usize,
    /// Row-major by z: index `z * width + x`
    altitudes: Vec<f32>,
    /// Unit direction towards the sun (or zero if unset)
    sunlight: Vec3,
}

impl HeightField {
    /// Flat terrain at altitude 0
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            width,
            depth,
            altitudes: vec![0.0; width * depth],
            sunlight: Vec3::ZERO,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Largest valid x coordinate (`width - 1`)
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.width.saturating_sub(1) as f32
    }

    /// Largest valid z coordinate (`depth - 1`)
    #[inline]
    pub fn max_z(&self) -> f32 {
        self.depth.saturating_sub(1) as f32
    }

    /// True if `(x, z)` lies in `[0, width-1] x [0, depth-1]`.
    /// An empty grid contains nothing.
    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        if self.altitudes.is_empty() {
            return false;
        }
        x >= 0.0 && x <= self.max_x() && z >= 0.0 && z <= self.max_z()
    }

    pub fn sunlight(&self) -> Vec3 {
        self.sunlight
    }

    /// Set the sun direction; stored normalized
    pub fn set_sunlight(&mut self, dir: Vec3) {
        self.sunlight = dir.normalize_or_zero();
    }

    /// Resize the grid, keeping overlapping altitudes and zero-filling the rest
    pub fn resize(&mut self, width: usize, depth: usize) {
        let mut altitudes = vec![0.0; width * depth];
        for z in 0..depth.min(self.depth) {
            for x in 0..width.min(self.width) {
                altitudes[z * width + x] = self.altitudes[z * self.width + x];
            }
        }
        self.width = width;
        self.depth = depth;
        self.altitudes = altitudes;
    }

    /// Altitude stored at a grid point, `None` outside the grid
    pub fn grid_altitude(&self, x: usize, z: usize) -> Option<f32> {
        if x < self.width && z < self.depth {
            Some(self.altitudes[z * self.width + x])
        } else {
            None
        }
    }

    /// Set the altitude of a grid point. Points outside the grid are ignored.
    pub fn set_grid_altitude(&mut self, x: usize, z: usize, h: f32) {
        if x < self.width && z < self.depth {
            self.altitudes[z * self.width + x] = h;
        }
    }

    /// Grid lookup for coordinates already known to be in range
    #[inline]
    fn at(&self, x: f32, z: f32) -> f32 {
        self.altitudes[z as usize * self.width + x as usize]
    }

    /// Altitude at an arbitrary ground point.
    ///
    /// Integer points return the stored value. Points on a grid line are
    /// interpolated along that line only. Interior points are interpolated on
    /// the cell triangle they fall in: first at the diagonal (`hyp_x`) for the
    /// point's `z`, then across to the cell edge. Outside the grid this is 0.
    pub fn altitude(&self, x: f32, z: f32) -> f32 {
        if !self.contains(x, z) {
            return 0.0;
        }

        let x_int = x.fract() == 0.0;
        let z_int = z.fract() == 0.0;
        if x_int && z_int {
            return self.at(x, z);
        }

        let left_x = x.floor();
        let right_x = x.ceil();
        let upper_z = z.floor();
        let lower_z = z.ceil();
        let hyp_x = left_x + lower_z - z;

        if x_int {
            self.lerp_z(z, upper_z, lower_z, x, x)
        } else if z_int {
            self.lerp_x(x, left_x, right_x, z)
        } else if x < hyp_x {
            // Triangle touching the left edge of the cell
            let diagonal = self.lerp_z(z, lower_z, upper_z, left_x, right_x);
            let edge = self.lerp_z(z, lower_z, upper_z, left_x, left_x);
            let w = (x - left_x) / (hyp_x - left_x);
            w * diagonal + (1.0 - w) * edge
        } else {
            // Triangle touching the right edge of the cell
            let diagonal = self.lerp_z(z, upper_z, lower_z, right_x, left_x);
            let edge = self.lerp_z(z, upper_z, lower_z, right_x, right_x);
            let w = (x - right_x) / (hyp_x - right_x);
            w * diagonal + (1.0 - w) * edge
        }
    }

    /// Linear blend along x between `(x1, z)` and `(x2, z)`
    fn lerp_x(&self, x: f32, x1: f32, x2: f32, z: f32) -> f32 {
        ((x - x1) / (x2 - x1)) * self.at(x2, z) + ((x2 - x) / (x2 - x1)) * self.at(x1, z)
    }

    /// Linear blend in z from grid point `(x1, z1)` to `(x2, z2)`
    fn lerp_z(&self, z: f32, z1: f32, z2: f32, x1: f32, x2: f32) -> f32 {
        ((z - z1) / (z2 - z1)) * self.at(x2, z2) + ((z2 - z) / (z2 - z1)) * self.at(x1, z1)
    }
}
