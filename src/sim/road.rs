//! Roads and their flat ribbon geometry
//!
//! The ribbon is generated by stepping along the spine and offsetting each
//! sample sideways by half the road width. The whole ribbon sits at one
//! altitude, taken from the terrain under the spine's start point.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::heightfield::HeightField;
use super::spline::SplineCurve;
use crate::consts::{ROAD_ALTITUDE_OFFSET, ROAD_DIVISION_FACTOR};
use crate::error::CurveError;

/// A road: a spine and a width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Road {
    pub width: f32,
    pub spine: SplineCurve,
}

impl Road {
    pub fn new(width: f32, spine: SplineCurve) -> Self {
        Self { width, spine }
    }

    /// Road from a flat spine `[x0, z0, (x1, z1, x2, z2, x3, z3)*]`
    pub fn from_spine(width: f32, spine: &[f32]) -> Result<Self, CurveError> {
        Ok(Self::new(width, SplineCurve::from_spine(spine)?))
    }

    /// Tessellate into a ribbon over `terrain`
    pub fn surface(&self, terrain: &HeightField) -> Result<RoadSurface, CurveError> {
        RoadSurface::build(&self.spine, self.width, terrain)
    }
}

/// One tessellation step of the ribbon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadQuad {
    pub current_left: Vec3,
    pub current_right: Vec3,
    pub next_left: Vec3,
    pub next_right: Vec3,
}

impl RoadQuad {
    /// The two triangles covering this quad
    pub fn triangles(&self) -> [[Vec3; 3]; 2] {
        [
            [self.current_left, self.current_right, self.next_right],
            [self.current_left, self.next_right, self.next_left],
        ]
    }
}

/// Derived road geometry, recomputed from the spine and terrain
#[derive(Debug, Clone, Default)]
pub struct RoadSurface {
    /// Altitude shared by every ribbon vertex
    pub altitude: f32,
    pub quads: Vec<RoadQuad>,
}

impl RoadSurface {
    /// Tessellate `spine` with `ROAD_DIVISION_FACTOR` steps.
    ///
    /// Each step needs the spine two steps ahead, so the last two steps are
    /// not emitted. A spine with no segments yields an empty ribbon.
    pub fn build(spine: &SplineCurve, width: f32, terrain: &HeightField) -> Result<Self, CurveError> {
        let segments = spine.segment_count();
        if segments == 0 {
            return Ok(Self::default());
        }

        let step = segments as f32 / ROAD_DIVISION_FACTOR as f32;
        let start = spine.point(0.0)?;
        let altitude = terrain.altitude(start.x, start.y) + ROAD_ALTITUDE_OFFSET;
        let half_width = width / 2.0;

        let mut quads = Vec::with_capacity(ROAD_DIVISION_FACTOR.saturating_sub(2));
        for i in 0..ROAD_DIVISION_FACTOR.saturating_sub(2) {
            let t = i as f32 * step;
            let current = spine.point(t)?;
            let next = spine.point(t + step)?;
            let next_next = spine.point(t + 2.0 * step)?;

            let current_offset = side_offset(next - current, half_width);
            let next_offset = side_offset(next_next - next, half_width);

            let current = Vec3::new(current.x, altitude, current.y);
            let next = Vec3::new(next.x, altitude, next.y);

            quads.push(RoadQuad {
                current_left: current - current_offset,
                current_right: current + current_offset,
                next_left: next - next_offset,
                next_right: next + next_offset,
            });
        }

        Ok(Self { altitude, quads })
    }
}

/// Horizontal offset perpendicular to `dir` with length `half_width`
fn side_offset(dir: Vec2, half_width: f32) -> Vec3 {
    let along = Vec3::new(dir.x, 0.0, dir.y);
    Vec3::Y.cross(along).normalize_or_zero() * half_width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_road(width: f32) -> Road {
        // Straight line along +x from (1, 2) to (4, 2)
        Road::from_spine(width, &[1.0, 2.0, 2.0, 2.0, 3.0, 2.0, 4.0, 2.0]).unwrap()
    }

    #[test]
    fn test_straight_ribbon_width() {
        let terrain = HeightField::new(6, 6);
        let surface = straight_road(0.5).surface(&terrain).unwrap();
        assert_eq!(surface.quads.len(), ROAD_DIVISION_FACTOR - 2);
        for quad in &surface.quads {
            let w = (quad.current_left - quad.current_right).length();
            assert!((w - 0.5).abs() < 1e-4);
            // Sideways is the z axis for a road running along x
            assert!((quad.current_left.x - quad.current_right.x).abs() < 1e-4);
            assert!((quad.current_left.z - 2.0).abs() > 0.2);
        }
    }

    #[test]
    fn test_ribbon_is_flat_at_start_altitude() {
        let mut terrain = HeightField::new(6, 6);
        terrain.set_grid_altitude(1, 2, 2.0);
        terrain.set_grid_altitude(3, 2, 5.0);
        let surface = straight_road(1.0).surface(&terrain).unwrap();
        let expected = 2.0 + ROAD_ALTITUDE_OFFSET;
        assert!((surface.altitude - expected).abs() < 1e-6);
        for quad in &surface.quads {
            for tri in quad.triangles() {
                assert!(tri.iter().all(|v| (v.y - expected).abs() < 1e-6));
            }
        }
    }

    #[test]
    fn test_quads_are_chained() {
        let terrain = HeightField::new(6, 6);
        let surface = straight_road(0.4).surface(&terrain).unwrap();
        let first = surface.quads[0];
        assert!((first.current_left.x - 1.0).abs() < 1e-5);
        for pair in surface.quads.windows(2) {
            assert!((pair[0].next_left - pair[1].current_left).length() < 1e-4);
        }
    }

    #[test]
    fn test_empty_spine() {
        let terrain = HeightField::new(2, 2);
        let road = Road::new(1.0, SplineCurve::new(Vec2::ZERO));
        assert!(road.surface(&terrain).unwrap().quads.is_empty());
    }
}
