//! Per-frame world update
//!
//! One call per displayed frame. There is no fixed timestep: every speed is
//! per frame, not per second. Order within a frame:
//! 1. enemy bounce animation (always, even after game over)
//! 2. avatar movement commands
//! 3. avatar rotation commands
//! 4. portal teleports (skipped after game over)
//! 5. enemy awareness, pursuit and catch (skipped after game over)

use glam::Vec2;

use super::collision::{portal_exit, within};
use super::state::{GameEvent, GamePhase, Movement, Mover, PortalPair, Turn, World};
use crate::heading;
use crate::tuning::Tuning;

/// Commands gathered for a single frame, in the order they were given
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub movements: Vec<Movement>,
    pub turns: Vec<Turn>,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.time_ticks += 1;

    for enemy in &mut world.enemies {
        enemy.animate(&world.tuning);
    }

    for &movement in &input.movements {
        if !world.move_avatar(movement) {
            events.push(GameEvent::MoveBlocked);
        }
    }
    for &turn in &input.turns {
        world.rotate_avatar(turn);
    }

    if world.phase == GamePhase::GameOver {
        return events;
    }

    apply_portals(world, &mut events);
    pursue_player(world, &mut events);

    events
}

/// Exit point for a mover at `pos`, if it stands in any portal.
///
/// Pairs are checked in order and the first portal of a pair before the
/// second. Only the first hit counts.
fn teleport_target(pos: Vec2, pairs: &[PortalPair], tuning: &Tuning) -> Option<Vec2> {
    let epsilon = tuning.portal_min_proximity;
    let pushback = tuning.portal_teleport_pushback;

    pairs.iter().find_map(|pair| {
        if within(pos, pair.first.pos, epsilon) {
            Some(portal_exit(&pair.second, pushback))
        } else if within(pos, pair.second.pos, epsilon) {
            Some(portal_exit(&pair.first, pushback))
        } else {
            None
        }
    })
}

/// Move the avatar and every enemy standing in a portal to its partner.
///
/// Each mover is tested once against its position before this step, so a
/// mover landing inside another portal stays there until the next frame.
fn apply_portals(world: &mut World, events: &mut Vec<GameEvent>) {
    if let Some(to) = teleport_target(world.avatar.pos, &world.portal_pairs, &world.tuning) {
        log::debug!("Avatar teleported to ({:.2}, {:.2})", to.x, to.y);
        world.avatar.pos = to;
        events.push(GameEvent::Teleported {
            mover: Mover::Avatar,
            to,
        });
    }

    for (i, enemy) in world.enemies.iter_mut().enumerate() {
        if let Some(to) = teleport_target(enemy.pos, &world.portal_pairs, &world.tuning) {
            log::debug!("Enemy {} teleported to ({:.2}, {:.2})", i, to.x, to.y);
            enemy.pos = to;
            events.push(GameEvent::Teleported {
                mover: Mover::Enemy(i),
                to,
            });
        }
    }
}

/// Enemies near the player turn to face it, step towards it, and end the
/// game if they reach it while grounded.
fn pursue_player(world: &mut World, events: &mut Vec<GameEvent>) {
    let target = world.avatar.pos;
    let tuning = &world.tuning;
    let terrain = &world.terrain;
    let mut caught_by = None;

    for (i, enemy) in world.enemies.iter_mut().enumerate() {
        if !within(target, enemy.pos, tuning.enemy_aware_proximity) {
            continue;
        }

        let delta = target - enemy.pos;
        let direction = delta.x.atan2(delta.y).to_degrees();
        enemy.rotation = -direction;
        events.push(GameEvent::EnemyAlerted { enemy: i });

        let distance = delta.length();
        if distance > tuning.enemy_dead_zone {
            let step = enemy.pos + heading(-(direction - 90.0)) * tuning.enemy_movement_speed;
            // Enemies never step onto the terrain's zero edges
            if step.x > 0.0 && step.x <= terrain.max_x() && step.y > 0.0 && step.y <= terrain.max_z() {
                enemy.pos = step;
            }
        }

        if distance <= tuning.enemy_catch_distance && enemy.is_grounded(tuning) {
            caught_by.get_or_insert(i);
        }
    }

    if let Some(enemy) = caught_by {
        log::info!("Game over! The player has been caught by enemy {}", enemy);
        world.phase = GamePhase::GameOver;
        events.push(GameEvent::PlayerCaught { enemy });
    }
}
