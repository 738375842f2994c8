//! Level description loading
//!
//! Levels are JSON:
//! ```json
//! {
//!   "width": 10, "depth": 10,
//!   "sunlight": [-1.0, 1.0, 0.0],
//!   "altitude": [0.0, ...],
//!   "trees": [{ "x": 1.0, "z": 2.0 }],
//!   "roads": [{ "width": 0.6, "spine": [1.0, 1.0, 2.0, 1.0, 3.0, 2.0, 4.0, 2.0] }],
//!   "enemies": [{ "x": 3.0, "z": 3.0, "rotation": 45.0 }],
//!   "portals": [{ "firstX": 1.0, "firstZ": 4.0, "firstRotation": 135.0,
//!                 "secondX": 1.0, "secondZ": 1.0, "secondRotation": 45.0 }]
//! }
//! ```
//! `altitude` is flat with index `x + z * width`.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::sim::{Enemy, HeightField, PortalPair, Road, World};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeDesc {
    pub x: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadDesc {
    pub width: f32,
    pub spine: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDesc {
    pub x: f32,
    pub z: f32,
    #[serde(default)]
    pub rotation: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalPairDesc {
    pub first_x: f32,
    pub first_z: f32,
    #[serde(default)]
    pub first_rotation: f32,
    pub second_x: f32,
    pub second_z: f32,
    #[serde(default)]
    pub second_rotation: f32,
}

/// A parsed level, not yet validated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDescription {
    pub width: usize,
    pub depth: usize,
    #[serde(default)]
    pub sunlight: [f32; 3],
    #[serde(default)]
    pub altitude: Vec<f32>,
    #[serde(default)]
    pub trees: Vec<TreeDesc>,
    #[serde(default)]
    pub roads: Vec<RoadDesc>,
    #[serde(default)]
    pub enemies: Vec<EnemyDesc>,
    #[serde(default)]
    pub portals: Vec<PortalPairDesc>,
}

impl LevelDescription {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Terrain grid and sun from this description
    pub fn terrain(&self) -> Result<HeightField, LevelError> {
        if self.width == 0 || self.depth == 0 {
            return Err(LevelError::InvalidDimensions {
                width: self.width,
                depth: self.depth,
            });
        }

        let expected = self.width * self.depth;
        // Omitted altitudes mean flat ground
        if !self.altitude.is_empty() && self.altitude.len() != expected {
            return Err(LevelError::AltitudeCount {
                expected,
                actual: self.altitude.len(),
            });
        }

        let mut terrain = HeightField::new(self.width, self.depth);
        for (i, &h) in self.altitude.iter().enumerate() {
            terrain.set_grid_altitude(i % self.width, i / self.width, h);
        }
        terrain.set_sunlight(Vec3::from_array(self.sunlight));
        Ok(terrain)
    }

    /// Build a ready-to-run world
    pub fn build(&self, tuning: Tuning) -> Result<World, LevelError> {
        let mut world = World::with_tuning(self.terrain()?, tuning);

        for tree in &self.trees {
            world.add_tree(tree.x, tree.z);
        }

        for (index, road) in self.roads.iter().enumerate() {
            Road::from_spine(road.width, &road.spine)
                .and_then(|road| world.add_road(road))
                .map_err(|source| LevelError::Road { index, source })?;
        }

        for enemy in &self.enemies {
            world.add_enemy(Enemy::new(Vec2::new(enemy.x, enemy.z), enemy.rotation));
        }

        for p in &self.portals {
            world.add_portal_pair(PortalPair::new(
                (Vec2::new(p.first_x, p.first_z), p.first_rotation),
                (Vec2::new(p.second_x, p.second_z), p.second_rotation),
            ));
        }

        log::info!(
            "Level loaded: {}x{} terrain, {} trees, {} roads, {} enemies, {} portal pairs",
            self.width,
            self.depth,
            self.trees.len(),
            self.roads.len(),
            self.enemies.len(),
            self.portals.len()
        );

        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;

    const LEVEL: &str = r#"{
        "width": 3, "depth": 2,
        "sunlight": [0.0, 2.0, 0.0],
        "altitude": [0.0, 1.0, 2.0,
                     3.0, 4.0, 5.0],
        "trees": [{ "x": 1.0, "z": 1.0 }],
        "roads": [{ "width": 0.5, "spine": [0.0, 0.0, 0.5, 0.0, 1.0, 0.5, 2.0, 1.0] }],
        "enemies": [{ "x": 1.5, "z": 0.5, "rotation": 45.0 }],
        "portals": [{ "firstX": 0.5, "firstZ": 0.5, "firstRotation": 90.0,
                      "secondX": 1.5, "secondZ": 1.0, "secondRotation": 0.0 }]
    }"#;

    #[test]
    fn test_build_level() {
        let world = LevelDescription::from_json(LEVEL).unwrap().build(Tuning::default()).unwrap();
        let terrain = world.terrain();
        assert_eq!(terrain.grid_altitude(2, 0), Some(2.0));
        assert_eq!(terrain.grid_altitude(0, 1), Some(3.0));
        assert_eq!(terrain.sunlight(), Vec3::Y);
        assert_eq!(world.trees()[0].pos, Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(world.road_surfaces().len(), 1);
        assert_eq!(world.enemies()[0].rotation, 45.0);
        assert_eq!(world.portal_pairs()[0].first.rotation, 90.0);
        assert_eq!(world.portal_pairs()[0].second.pos, Vec2::new(1.5, 1.0));
    }

    #[test]
    fn test_demo_level_builds() {
        let level = LevelDescription::from_json(include_str!("../levels/demo.json")).unwrap();
        let world = level.build(Tuning::default()).unwrap();
        assert_eq!(world.terrain().width(), 10);
        assert_eq!(world.roads()[0].spine.segment_count(), 2);
        assert!(!world.road_surfaces()[0].quads.is_empty());
    }

    #[test]
    fn test_missing_altitudes_are_flat() {
        let level = LevelDescription::from_json(r#"{ "width": 4, "depth": 4 }"#).unwrap();
        let terrain = level.terrain().unwrap();
        assert_eq!(terrain.altitude(1.5, 2.5), 0.0);
    }

    #[test]
    fn test_wrong_altitude_count() {
        let level = LevelDescription::from_json(r#"{ "width": 2, "depth": 2, "altitude": [1.0] }"#).unwrap();
        assert!(matches!(
            level.terrain(),
            Err(LevelError::AltitudeCount { expected: 4, actual: 1 })
        ));
    }

    #[test]
    fn test_zero_size() {
        let level = LevelDescription::from_json(r#"{ "width": 0, "depth": 3 }"#).unwrap();
        assert!(matches!(level.terrain(), Err(LevelError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_malformed_road() {
        let level = LevelDescription::from_json(
            r#"{ "width": 2, "depth": 2, "roads": [{ "width": 1.0, "spine": [0.0, 0.0, 1.0] }] }"#,
        )
        .unwrap();
        match level.build(Tuning::default()) {
            Err(LevelError::Road { index: 0, source }) => {
                assert_eq!(source, CurveError::MalformedSpine { len: 3 });
            }
            other => panic!("expected road error, got {:?}", other.map(|_| ())),
        }
    }
}
