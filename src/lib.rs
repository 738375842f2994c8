//! Portal World - a heightfield world with roads, portals and a chasing enemy
//!
//! Core modules:
//! - `sim`: Frame-synchronous world simulation (terrain, roads, entities, tick)
//! - `camera`: First/third person camera rig and night-mode torch
//! - `input`: Key name to command translation
//! - `level`: Level description loading
//! - `renderer`: Mesh data for GPU upload
//! - `tuning`: Data-driven gameplay balance

pub mod camera;
pub mod error;
pub mod input;
pub mod level;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, CurveError, LevelError};
pub use settings::{Settings, ViewMode};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player walking speed (world units per command)
    pub const WALKING_SPEED: f32 = 0.1;
    /// Degrees turned per rotate command
    pub const CAMERA_ROTATION_STEP: f32 = 10.0;
    /// Initial camera yaw in degrees
    pub const CAMERA_DEFAULT_ROTATION: f32 = 45.0;

    /// Enemy step toward the player per frame
    pub const ENEMY_MOVEMENT_SPEED: f32 = 0.02;
    /// Axis-wise distance at which an enemy notices the player
    pub const ENEMY_AWARE_PROXIMITY: f32 = 1.5;
    /// Enemies stop stepping inside this straight-line distance
    pub const ENEMY_DEAD_ZONE: f32 = 0.1;
    /// Straight-line distance at which a grounded enemy catches the player
    pub const ENEMY_CATCH_DISTANCE: f32 = 0.2;
    /// Resting bounce height of an enemy
    pub const MIN_ENEMY_ALTITUDE: f32 = 0.18;
    /// How close to resting height counts as grounded
    pub const ENEMY_GROUNDED_TOLERANCE: f32 = 0.05;
    /// Bounce phase advance per frame
    pub const BOUNCE_INCREMENT: f32 = 0.05;
    /// Bounce phase wraps at this value
    pub const BOUNCE_PERIOD: f32 = 180.0;

    /// Axis-wise distance at which a mover enters a portal
    pub const PORTAL_MIN_PROXIMITY: f32 = 0.15;
    /// Distance a mover is pushed out of the destination portal
    pub const PORTAL_TELEPORT_PUSHBACK: f32 = 0.3;
    /// Portal disc centre above the ground
    pub const PORTAL_ALTITUDE_OFFSET: f32 = 0.8;

    /// Road tessellation steps across the whole spine
    pub const ROAD_DIVISION_FACTOR: usize = 100;
    /// Road lift above the terrain (avoids z-fighting)
    pub const ROAD_ALTITUDE_OFFSET: f32 = 0.015;

    /// Eye height above the terrain
    pub const CAMERA_ALTITUDE_OFFSET: f32 = 0.5;
    /// Extra eye height in third person
    pub const THIRD_PERSON_ALTITUDE_CHANGE: f32 = 1.0;
    /// Avatar model lift above the terrain
    pub const AVATAR_ALTITUDE_OFFSET: f32 = 0.08;
    /// Base vertical field of view (degrees), scaled by aspect ratio
    pub const FIELD_OF_VIEW: f32 = 60.0;
    pub const MAX_FIELD_OF_VIEW: f32 = 180.0;
    pub const NEAR_PLANE: f32 = 0.01;
    pub const FAR_PLANE: f32 = 10000.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // Tiny negatives round up to 360 in f32
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit ground direction (x, z) for a yaw in degrees
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}
