//! Data-driven gameplay balance
//!
//! Defaults match `consts`. A tuning file only needs the fields it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Speeds and thresholds read by the simulation every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub walking_speed: f32,
    pub camera_rotation_step: f32,
    pub camera_default_rotation: f32,

    // === Enemies ===
    pub enemy_movement_speed: f32,
    pub enemy_aware_proximity: f32,
    pub enemy_dead_zone: f32,
    pub enemy_catch_distance: f32,
    pub min_enemy_altitude: f32,
    pub enemy_grounded_tolerance: f32,
    pub bounce_increment: f32,

    // === Portals ===
    pub portal_min_proximity: f32,
    pub portal_teleport_pushback: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            walking_speed: WALKING_SPEED,
            camera_rotation_step: CAMERA_ROTATION_STEP,
            camera_default_rotation: CAMERA_DEFAULT_ROTATION,

            enemy_movement_speed: ENEMY_MOVEMENT_SPEED,
            enemy_aware_proximity: ENEMY_AWARE_PROXIMITY,
            enemy_dead_zone: ENEMY_DEAD_ZONE,
            enemy_catch_distance: ENEMY_CATCH_DISTANCE,
            min_enemy_altitude: MIN_ENEMY_ALTITUDE,
            enemy_grounded_tolerance: ENEMY_GROUNDED_TOLERANCE,
            bounce_increment: BOUNCE_INCREMENT,

            portal_min_proximity: PORTAL_MIN_PROXIMITY,
            portal_teleport_pushback: PORTAL_TELEPORT_PUSHBACK,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
