//! World state and entity types
//!
//! The world owns every mutable entity. Other code reads copies through
//! accessors and changes state only through commands and `tick`.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::heightfield::HeightField;
use super::road::{Road, RoadSurface};
use crate::consts::*;
use crate::error::CurveError;
use crate::tuning::Tuning;
use crate::{heading, normalize_degrees};

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// An enemy caught the player. Never left.
    GameOver,
}

/// Direction of a walk command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
}

/// Direction of a turn command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// The player: camera position and yaw on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    /// Yaw in degrees, [0, 360)
    pub rotation: f32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            rotation: CAMERA_DEFAULT_ROTATION,
        }
    }
}

/// A bouncing enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Facing in degrees (world convention, drawn as `-rotation`)
    pub rotation: f32,
    /// Cyclic phase in [0, BOUNCE_PERIOD)
    pub bounce_phase: f32,
    /// Current height above the ground, never below the resting height
    pub bounce_height: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, rotation: f32) -> Self {
        Self {
            pos,
            rotation,
            bounce_phase: 0.0,
            bounce_height: MIN_ENEMY_ALTITUDE,
        }
    }

    /// Advance the bounce animation by one frame
    pub fn animate(&mut self, tuning: &Tuning) {
        self.bounce_phase = (self.bounce_phase + tuning.bounce_increment) % BOUNCE_PERIOD;
        self.bounce_height = self.bounce_phase.sin().abs().max(tuning.min_enemy_altitude);
    }

    /// True when the enemy is at (or near) its resting height
    pub fn is_grounded(&self, tuning: &Tuning) -> bool {
        (tuning.min_enemy_altitude - self.bounce_height).abs() <= tuning.enemy_grounded_tolerance
    }
}

/// Which end of a portal pair a portal is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalRole {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    pub pos: Vec2,
    /// Facing in degrees
    pub rotation: f32,
    pub role: PortalRole,
}

impl Portal {
    pub fn new(pos: Vec2, rotation: f32, role: PortalRole) -> Self {
        Self { pos, rotation, role }
    }
}

/// Two linked portals. Entering one exits from the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortalPair {
    pub first: Portal,
    pub second: Portal,
}

impl PortalPair {
    pub fn new(first: (Vec2, f32), second: (Vec2, f32)) -> Self {
        Self {
            first: Portal::new(first.0, first.1, PortalRole::First),
            second: Portal::new(second.0, second.1, PortalRole::Second),
        }
    }
}

/// A tree planted on the terrain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Base of the trunk, y from terrain altitude at placement
    pub pos: Vec3,
}

/// Who went through a portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mover {
    Avatar,
    Enemy(usize),
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A move command would have left the terrain
    MoveBlocked,
    Teleported { mover: Mover, to: Vec2 },
    /// An enemy is in awareness range and facing the player
    EnemyAlerted { enemy: usize },
    /// A grounded enemy reached the player
    PlayerCaught { enemy: usize },
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct World {
    pub(super) terrain: HeightField,
    pub(super) trees: Vec<Tree>,
    pub(super) roads: Vec<Road>,
    pub(super) road_surfaces: Vec<RoadSurface>,
    pub(super) portal_pairs: Vec<PortalPair>,
    pub(super) avatar: Avatar,
    pub(super) enemies: Vec<Enemy>,
    pub(super) phase: GamePhase,
    pub(super) tuning: Tuning,
    /// Frames simulated so far
    pub(super) time_ticks: u64,
}

impl World {
    /// Empty world over `terrain` with the avatar at the origin
    pub fn new(terrain: HeightField) -> Self {
        Self::with_tuning(terrain, Tuning::default())
    }

    pub fn with_tuning(terrain: HeightField, tuning: Tuning) -> Self {
        Self {
            terrain,
            trees: Vec::new(),
            roads: Vec::new(),
            road_surfaces: Vec::new(),
            portal_pairs: Vec::new(),
            avatar: Avatar {
                pos: Vec2::ZERO,
                rotation: normalize_degrees(tuning.camera_default_rotation),
            },
            enemies: Vec::new(),
            phase: GamePhase::Playing,
            tuning,
            time_ticks: 0,
        }
    }

    // === Level authoring ===

    /// Plant a tree at `(x, z)` on the ground
    pub fn add_tree(&mut self, x: f32, z: f32) {
        let y = self.terrain.altitude(x, z);
        self.trees.push(Tree {
            pos: Vec3::new(x, y, z),
        });
    }

    /// Add a road and tessellate it over the current terrain
    pub fn add_road(&mut self, road: Road) -> Result<(), CurveError> {
        let surface = road.surface(&self.terrain)?;
        self.roads.push(road);
        self.road_surfaces.push(surface);
        Ok(())
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn add_portal_pair(&mut self, pair: PortalPair) {
        self.portal_pairs.push(pair);
    }

    /// Place the avatar. Positions off the terrain are ignored.
    pub fn place_avatar(&mut self, pos: Vec2, rotation: f32) {
        if self.terrain.contains(pos.x, pos.y) {
            self.avatar.pos = pos;
        }
        self.avatar.rotation = normalize_degrees(rotation);
    }

    // === Commands ===

    /// Walk one step along (or against) the current yaw.
    ///
    /// Returns false and leaves the avatar in place if the step would leave
    /// the terrain.
    pub fn move_avatar(&mut self, movement: Movement) -> bool {
        let step = heading(self.avatar.rotation) * self.tuning.walking_speed;
        let candidate = match movement {
            Movement::Forward => self.avatar.pos + step,
            Movement::Backward => self.avatar.pos - step,
        };

        if self.terrain.contains(candidate.x, candidate.y) {
            self.avatar.pos = candidate;
            true
        } else {
            log::debug!("Move to ({:.2}, {:.2}) rejected: off terrain", candidate.x, candidate.y);
            false
        }
    }

    /// Turn by one rotation step, keeping yaw in [0, 360)
    pub fn rotate_avatar(&mut self, turn: Turn) {
        let delta = match turn {
            Turn::Left => -self.tuning.camera_rotation_step,
            Turn::Right => self.tuning.camera_rotation_step,
        };
        self.avatar.rotation = normalize_degrees(self.avatar.rotation + delta);
    }

    // === Accessors ===

    pub fn terrain(&self) -> &HeightField {
        &self.terrain
    }

    /// Terrain altitude at a ground point (0 off the terrain)
    pub fn altitude(&self, x: f32, z: f32) -> f32 {
        self.terrain.altitude(x, z)
    }

    pub fn avatar(&self) -> Avatar {
        self.avatar
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, index: usize) -> Option<Enemy> {
        self.enemies.get(index).copied()
    }

    pub fn portal_pairs(&self) -> &[PortalPair] {
        &self.portal_pairs
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Ribbon geometry, one per road in the same order
    pub fn road_surfaces(&self) -> &[RoadSurface] {
        &self.road_surfaces
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flat_world(size: usize) -> World {
        World::new(HeightField::new(size, size))
    }

    #[test]
    fn test_walk_scenario() {
        let mut world = flat_world(10);
        world.place_avatar(Vec2::ZERO, 0.0);
        for _ in 0..9 {
            assert!(world.move_avatar(Movement::Forward));
        }
        let avatar = world.avatar();
        assert!((avatar.pos.x - 0.9).abs() < 1e-4);
        assert_eq!(avatar.pos.y, 0.0);
    }

    #[test]
    fn test_move_off_terrain_is_noop() {
        let mut world = flat_world(10);
        world.place_avatar(Vec2::ZERO, 0.0);
        assert!(!world.move_avatar(Movement::Backward));
        assert_eq!(world.avatar().pos, Vec2::ZERO);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut world = flat_world(4);
        world.place_avatar(Vec2::ZERO, 0.0);
        world.rotate_avatar(Turn::Left);
        assert!((world.avatar().rotation - 350.0).abs() < 1e-4);
        world.rotate_avatar(Turn::Right);
        world.rotate_avatar(Turn::Right);
        assert!((world.avatar().rotation - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_default_rotation() {
        let world = flat_world(4);
        assert_eq!(world.avatar().rotation, CAMERA_DEFAULT_ROTATION);
        assert_eq!(world.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_enemy_bounce() {
        let tuning = Tuning::default();
        let mut enemy = Enemy::new(Vec2::ZERO, 0.0);
        enemy.animate(&tuning);
        assert!((enemy.bounce_phase - 0.05).abs() < 1e-6);
        assert_eq!(enemy.bounce_height, MIN_ENEMY_ALTITUDE);
        assert!(enemy.is_grounded(&tuning));

        enemy.bounce_phase = 1.5;
        enemy.animate(&tuning);
        assert!((enemy.bounce_height - 1.55f32.sin()).abs() < 1e-6);
        assert!(!enemy.is_grounded(&tuning));

        enemy.bounce_phase = 179.98;
        enemy.animate(&tuning);
        assert!(enemy.bounce_phase < 0.1);
    }

    #[test]
    fn test_tree_sits_on_terrain() {
        let mut terrain = HeightField::new(3, 3);
        terrain.set_grid_altitude(1, 1, 2.0);
        let mut world = World::new(terrain);
        world.add_tree(1.0, 1.0);
        assert_eq!(world.trees()[0].pos, Vec3::new(1.0, 2.0, 1.0));
    }

    proptest! {
        #[test]
        fn prop_avatar_stays_on_terrain(
            start_yaw in 0.0f32..360.0,
            commands in proptest::collection::vec(0u8..4, 0..300),
        ) {
            let mut world = flat_world(5);
            world.place_avatar(Vec2::new(2.0, 2.0), start_yaw);
            for c in commands {
                match c {
                    0 => { world.move_avatar(Movement::Forward); }
                    1 => { world.move_avatar(Movement::Backward); }
                    2 => world.rotate_avatar(Turn::Left),
                    _ => world.rotate_avatar(Turn::Right),
                }
                let avatar = world.avatar();
                prop_assert!(world.terrain().contains(avatar.pos.x, avatar.pos.y));
                prop_assert!(avatar.rotation >= 0.0 && avatar.rotation < 360.0);
            }
        }
    }
}
