//! Portal World entry point
//!
//! Headless driver: loads a level, then treats each stdin line as one frame.
//! A line holds the key names pressed during that frame, e.g.
//! `ArrowUp ArrowLeft`. An empty line is an idle frame.

use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;

use portal_world::camera::{self, CameraRig};
use portal_world::input::InputState;
use portal_world::level::LevelDescription;
use portal_world::renderer;
use portal_world::sim::{GameEvent, tick};
use portal_world::{Settings, Tuning};

const DEMO_LEVEL: &str = include_str!("../levels/demo.json");
const SETTINGS_PATH: &str = "portal-world-settings.json";

#[derive(Parser)]
#[command(name = "portal-world")]
#[command(about = "Walk a heightfield world from key frames read on stdin")]
struct Args {
    /// Level description (JSON). Defaults to the built-in demo level.
    level: Option<PathBuf>,
    /// Gameplay tuning overrides (JSON)
    tuning: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    env_logger::init();
    log::info!("Portal World starting...");

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let level = match &args.level {
        Some(path) => LevelDescription::load(path)?,
        None => {
            log::info!("No level given, using built-in demo level");
            LevelDescription::from_json(DEMO_LEVEL)?
        }
    };
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let mut world = level.build(tuning)?;
    let mut settings = Settings::load(SETTINGS_PATH);
    let mut input = InputState::new();

    let terrain_vertices = renderer::terrain_mesh(world.terrain()).len();
    let road_vertices: usize = world
        .road_surfaces()
        .iter()
        .map(|s| renderer::road_mesh(s).len())
        .sum();
    log::info!("Meshes: {} terrain vertices, {} road vertices", terrain_vertices, road_vertices);
    log::info!("Scene: {} models", renderer::scene_models(&world, &settings).len());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        for key in line.split_whitespace() {
            input.key_pressed(key, &mut settings);
        }

        let was_over = world.is_game_over();
        for event in tick(&mut world, &input.take_tick_input()) {
            if let GameEvent::Teleported { mover, to } = event {
                log::info!("{:?} teleported to ({:.2}, {:.2})", mover, to.x, to.y);
            }
        }

        let avatar = world.avatar();
        let rig = CameraRig::for_avatar(&avatar, world.terrain(), settings.view_mode);
        println!(
            "frame {:>5}  pos ({:.2}, {:.2})  yaw {:>5.1}  eye ({:.2}, {:.2}, {:.2})  avatar {}",
            world.time_ticks(),
            avatar.pos.x,
            avatar.pos.y,
            avatar.rotation,
            rig.eye.x,
            rig.eye.y,
            rig.eye.z,
            if camera::avatar_visible(&world, &settings) { "shown" } else { "hidden" },
        );

        if world.is_game_over() && !was_over {
            println!("Game over! The player has been killed by an enemy.");
        }
    }

    if let Err(e) = settings.save(SETTINGS_PATH) {
        log::warn!("Could not save settings: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_are_optional() {
        let args = Args::try_parse_from(["portal-world"]).unwrap();
        assert!(args.level.is_none() && args.tuning.is_none());

        let args = Args::try_parse_from(["portal-world", "a.json", "b.json"]).unwrap();
        assert_eq!(args.level, Some(PathBuf::from("a.json")));
        assert_eq!(args.tuning, Some(PathBuf::from("b.json")));
    }
}
