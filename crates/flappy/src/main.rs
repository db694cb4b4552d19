//! Flappy - a small arcade game session shell
//!
//! Wires the play and round-over scenes to a shared world registry and
//! runs the scene director loop. Rendering and input backends are
//! external; this shell runs headless, so the round-over confirmation
//! is clicked programmatically once it appears.

mod config;
mod objects;
mod scenes;

use crate::config::GameConfig;
use crate::objects::GameObject;
use crate::scenes::{DoneSceneNode, PlaySceneNode};
use flappy_engine::prelude::{SceneDirector, Timer, Vec2, World};

/// Fixed simulation timestep
const FIXED_DT: f32 = 1.0 / 60.0;

fn main() {
    flappy_engine::foundation::logging::init();

    if let Err(err) = run() {
        log::error!("Session failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::load("flappy.toml")?;
    log::info!(
        "Starting '{}' ({}x{})",
        config.window.title,
        config.window.width,
        config.window.height
    );

    let mut world = World::new();
    let mut director = SceneDirector::new();
    director.add_scene("play", Box::new(PlaySceneNode::new(config.gameplay.clone())));
    director.add_scene("done", Box::new(DoneSceneNode::new()));
    director.start("play", &mut world)?;

    let mut timer = Timer::new();
    while director.is_active() {
        timer.update();
        director.step(&mut world, FIXED_DT)?;

        // No input backend: confirm the round-over screen ourselves
        if director.current_scene() == Some("done") {
            if let Some(button) = world.get_mut("OkButton").and_then(GameObject::as_button_mut) {
                let center = Vec2::new(500.0, 400.0);
                button.press(center);
                button.release(center);
            }
        }
    }

    if !world.is_empty() {
        log::warn!(
            "{} objects leaked past the final transition: {:?}",
            world.len(),
            world.signatures().collect::<Vec<_>>()
        );
    }
    log::info!(
        "Session finished after {} frames ({:.2}s wall clock)",
        timer.frame_count(),
        timer.total_time()
    );
    Ok(())
}
