//! Model placements for everything that is not a mesh
//!
//! Trees, enemies, portals and the avatar are drawn from shared models. This
//! module says where each one goes and which way it faces.

use glam::Vec3;

use super::vertex::colors;
use crate::camera::avatar_visible;
use crate::consts::{AVATAR_ALTITUDE_OFFSET, PORTAL_ALTITUDE_OFFSET};
use crate::settings::Settings;
use crate::sim::{Portal, PortalRole, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Tree,
    Enemy,
    Portal(PortalRole),
    Avatar,
}

impl ModelKind {
    /// Flat color for untextured models
    pub fn tint(&self) -> Option<[f32; 4]> {
        match self {
            ModelKind::Enemy => Some(colors::ENEMY_BODY),
            ModelKind::Portal(PortalRole::First) => Some(colors::PORTAL_FIRST),
            ModelKind::Portal(PortalRole::Second) => Some(colors::PORTAL_SECOND),
            ModelKind::Tree | ModelKind::Avatar => None,
        }
    }
}

/// One model instance in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPlacement {
    pub kind: ModelKind,
    pub position: Vec3,
    /// Rotation about +y in degrees
    pub yaw: f32,
}

/// Background color for the current lighting mode
pub fn clear_color(settings: &Settings) -> [f32; 4] {
    if settings.night_mode { colors::NIGHT_SKY } else { colors::SKY }
}

fn portal_placement(world: &World, portal: &Portal) -> ModelPlacement {
    ModelPlacement {
        kind: ModelKind::Portal(portal.role),
        position: Vec3::new(
            portal.pos.x,
            world.altitude(portal.pos.x, portal.pos.y) + PORTAL_ALTITUDE_OFFSET,
            portal.pos.y,
        ),
        yaw: portal.rotation,
    }
}

/// Every model to draw this frame: trees, enemies, portals, then the avatar
/// when it is visible
pub fn scene_models(world: &World, settings: &Settings) -> Vec<ModelPlacement> {
    let mut models = Vec::with_capacity(
        world.trees().len() + world.enemies().len() + world.portal_pairs().len() * 2 + 1,
    );

    models.extend(world.trees().iter().map(|tree| ModelPlacement {
        kind: ModelKind::Tree,
        position: tree.pos,
        yaw: 0.0,
    }));

    // Enemies and the avatar face along -rotation in model space
    models.extend(world.enemies().iter().map(|enemy| ModelPlacement {
        kind: ModelKind::Enemy,
        position: Vec3::new(
            enemy.pos.x,
            world.altitude(enemy.pos.x, enemy.pos.y) + enemy.bounce_height,
            enemy.pos.y,
        ),
        yaw: -enemy.rotation,
    }));

    for pair in world.portal_pairs() {
        models.push(portal_placement(world, &pair.first));
        models.push(portal_placement(world, &pair.second));
    }

    if avatar_visible(world, settings) {
        let avatar = world.avatar();
        models.push(ModelPlacement {
            kind: ModelKind::Avatar,
            position: Vec3::new(
                avatar.pos.x,
                world.altitude(avatar.pos.x, avatar.pos.y) + AVATAR_ALTITUDE_OFFSET,
                avatar.pos.y,
            ),
            yaw: -avatar.rotation,
        });
    }

    models
}
