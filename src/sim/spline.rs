//! Road spine: a chain of cubic Bézier segments in the ground plane
//!
//! Control points are stored flat. Point 0 starts the chain and every
//! segment appends two handles and an endpoint, so segment `k` uses points
//! `3k..=3k+3`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::CurveError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplineCurve {
    points: Vec<Vec2>,
}

impl SplineCurve {
    /// Empty chain starting at `start`
    pub fn new(start: Vec2) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Build from flat coordinates `[x0, z0, x1, z1, ...]`: a start point
    /// followed by groups of six values per segment.
    pub fn from_spine(spine: &[f32]) -> Result<Self, CurveError> {
        if spine.len() < 2 || (spine.len() - 2) % 6 != 0 {
            return Err(CurveError::MalformedSpine { len: spine.len() });
        }
        let points = spine
            .chunks_exact(2)
            .map(|p| Vec2::new(p[0], p[1]))
            .collect();
        Ok(Self { points })
    }

    /// Append a segment from the current end through handles `c1`, `c2` to `end`
    pub fn add_segment(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.points.extend([c1, c2, end]);
    }

    /// Number of Bézier segments
    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Total number of control points, including the start
    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    /// Raw control point `i` (handles are not on the curve)
    pub fn control_point(&self, i: usize) -> Result<Vec2, CurveError> {
        self.points
            .get(i)
            .copied()
            .ok_or(CurveError::ControlPointOutOfRange {
                index: i,
                count: self.points.len(),
            })
    }

    /// Point on the chain at `t` in `[0, segment_count)`.
    ///
    /// `floor(t)` picks the segment and the fractional part is the local
    /// Bézier parameter.
    pub fn point(&self, t: f32) -> Result<Vec2, CurveError> {
        let segments = self.segment_count();
        if !t.is_finite() || t < 0.0 || t >= segments as f32 {
            return Err(CurveError::ParameterOutOfRange { t, segments });
        }

        // Guard against t rounding up to the last index in f32
        let i = (t.floor() as usize).min(segments - 1);
        let u = t - i as f32;
        let p = &self.points[i * 3..i * 3 + 4];

        let [b0, b1, b2, b3] = bernstein(u);
        Ok(p[0] * b0 + p[1] * b1 + p[2] * b2 + p[3] * b3)
    }
}

/// Cubic Bernstein basis at `u`
#[inline]
fn bernstein(u: f32) -> [f32; 4] {
    let v = 1.0 - u;
    [v * v * v, 3.0 * v * v * u, 3.0 * v * u * u, u * u * u]
}
