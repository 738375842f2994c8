//! Camera rig for the renderer
//!
//! Derives eye/target/projection from the avatar and the viewer settings.
//! The eye follows the terrain so the view never sinks into hills.

use glam::{Mat4, Vec3};

use crate::consts::*;
use crate::heading;
use crate::settings::{Settings, ViewMode};
use crate::sim::{Avatar, HeightField, World};

/// Eye, look-at target and up vector in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraRig {
    /// Rig for `avatar` standing on `terrain`.
    ///
    /// Third person pulls the eye back one unit against the yaw and raises it.
    pub fn for_avatar(avatar: &Avatar, terrain: &HeightField, view: ViewMode) -> Self {
        let dir = heading(avatar.rotation);
        let ground = terrain.altitude(avatar.pos.x, avatar.pos.y) + CAMERA_ALTITUDE_OFFSET;

        let (back, lift) = match view {
            ViewMode::FirstPerson => (glam::Vec2::ZERO, 0.0),
            ViewMode::ThirdPerson => (dir, THIRD_PERSON_ALTITUDE_CHANGE),
        };

        Self {
            eye: Vec3::new(avatar.pos.x - back.x, ground + lift, avatar.pos.y - back.y),
            target: Vec3::new(avatar.pos.x + dir.x, ground, avatar.pos.y + dir.y),
            up: Vec3::Y,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Field of view in degrees for a viewport aspect ratio
pub fn field_of_view(aspect: f32, base_fov: f32) -> f32 {
    (aspect * base_fov).min(MAX_FIELD_OF_VIEW)
}

/// Perspective projection for a `width x height` viewport
pub fn projection_matrix(width: u32, height: u32, settings: &Settings) -> Mat4 {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    // A full 180 degrees is degenerate for a perspective matrix
    let fov = field_of_view(aspect, settings.field_of_view).min(179.0);
    Mat4::perspective_rh(fov.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
}

/// Where the light comes from this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lighting {
    /// Directional light towards the sun
    Sun { direction: Vec3 },
    /// Spotlight carried by the player
    Torch { position: Vec3, direction: Vec3 },
}

/// Sun by day, torch at the camera in night mode
pub fn lighting(world: &World, settings: &Settings) -> Lighting {
    if !settings.night_mode {
        return Lighting::Sun {
            direction: world.terrain().sunlight(),
        };
    }

    let avatar = world.avatar();
    let dir = heading(avatar.rotation);
    Lighting::Torch {
        position: Vec3::new(
            avatar.pos.x,
            world.altitude(avatar.pos.x, avatar.pos.y) + CAMERA_ALTITUDE_OFFSET,
            avatar.pos.y,
        ),
        direction: Vec3::new(dir.x, 0.0, dir.y),
    }
}

/// The avatar model is shown in third person until the game ends
pub fn avatar_visible(world: &World, settings: &Settings) -> bool {
    settings.view_mode == ViewMode::ThirdPerson && !world.is_game_over()
}
