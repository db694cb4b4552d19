//! Round-in-progress scene
//!
//! Registers the round objects, scrolls pipes through the detector,
//! and ends the round when the bird hits the floor. Its objects stay
//! registered after `leave`: ownership hands over to the round-over
//! scene, which removes them once the player confirms.

use crate::config::GameplayConfig;
use crate::objects::{Bird, Floor, GameObject, Pipe, PipeDetector, ScoreBoard};
use flappy_engine::prelude::{Button, DetectSwitch, SceneError, SceneNode, Vec2, World, WorldError};

/// Scene node for an active round
#[derive(Debug)]
pub struct PlaySceneNode {
    config: GameplayConfig,
    detect_switch: DetectSwitch,
    spawn_timer: f32,
}

impl PlaySceneNode {
    /// Create the scene node with the given gameplay settings
    pub fn new(config: GameplayConfig) -> Self {
        let spawn_timer = config.pipe_interval; // first pipe spawns immediately
        Self {
            config,
            detect_switch: DetectSwitch::new(),
            spawn_timer,
        }
    }

    fn detector_mut<'a>(
        world: &'a mut World<GameObject>,
    ) -> Result<&'a mut PipeDetector, SceneError> {
        world
            .get_mut("PipeDetector")
            .and_then(GameObject::as_pipe_detector_mut)
            .ok_or(SceneError::MissingCollaborator {
                signature: "PipeDetector",
                capability: "pipe detector",
            })
    }

    /// Spawn a pipe when the interval has elapsed
    fn spawn_pipes(
        &mut self,
        world: &mut World<GameObject>,
        delta_time: f32,
    ) -> Result<(), SceneError> {
        self.spawn_timer += delta_time;
        if self.spawn_timer < self.config.pipe_interval {
            return Ok(());
        }
        self.spawn_timer -= self.config.pipe_interval;

        let spawn_at = Vec2::new(self.config.pipe_spawn_x, self.config.floor_height * 0.5);
        let pipe = Self::detector_mut(world)?.spawn_pipe(spawn_at);
        let signature = Pipe::signature(pipe.signature_number);
        log::debug!("Spawning pipe '{}'", signature);
        world.add(signature, GameObject::Pipe(pipe))?;
        Ok(())
    }

    /// Scroll pipes left, cull the ones past the edge, and score them
    fn scroll_pipes(
        &mut self,
        world: &mut World<GameObject>,
        delta_time: f32,
    ) -> Result<(), SceneError> {
        let detected: Vec<i32> = Self::detector_mut(world)?.detected_pipes().to_vec();

        let mut culled = Vec::new();
        for signature_number in detected {
            let signature = Pipe::signature(signature_number);
            let pipe = world
                .get_mut(&signature)
                .and_then(GameObject::as_pipe_mut)
                .ok_or_else(|| SceneError::World(WorldError::MissingObject(signature.clone())))?;
            pipe.position.x -= self.config.scroll_speed * delta_time;
            if pipe.position.x < self.config.pipe_cull_x {
                culled.push(signature_number);
            }
        }

        for signature_number in culled {
            world.remove(&Pipe::signature(signature_number))?;
            Self::detector_mut(world)?.forget(signature_number);
            if let Some(board) = world.get_mut("ScoreBoard").and_then(GameObject::as_score_board_mut) {
                board.add_point();
            }
        }
        Ok(())
    }

    /// Apply gravity to the bird and end the round on floor contact
    fn update_bird(
        &mut self,
        world: &mut World<GameObject>,
        delta_time: f32,
    ) -> Result<(), SceneError> {
        let floor_height = world
            .get("Floor")
            .and_then(GameObject::as_floor)
            .map(|floor| floor.height)
            .ok_or(SceneError::MissingCollaborator {
                signature: "Floor",
                capability: "floor",
            })?;

        let bird = world
            .get_mut("Bird")
            .and_then(GameObject::as_bird_mut)
            .ok_or(SceneError::MissingCollaborator {
                signature: "Bird",
                capability: "bird",
            })?;

        if !bird.alive {
            return Ok(());
        }

        bird.fall(self.config.gravity, delta_time);
        if bird.position.y >= floor_height {
            bird.position.y = floor_height;
            bird.alive = false;
            log::info!("Bird hit the floor; round over");
            self.detect_switch.set(true);
        }
        Ok(())
    }
}

impl SceneNode<GameObject> for PlaySceneNode {
    fn entry(&mut self, world: &mut World<GameObject>) -> Result<(), SceneError> {
        let mut press_button = Button::new();
        press_button.update_order = 6;
        press_button.active = true;
        press_button.texture = "PressButton".to_owned();
        press_button.create_ui_body(Vec2::new(500.0, 520.0), 240.0, 80.0);
        world.add("PressButton", GameObject::Button(press_button))?;

        world.add(
            "Floor",
            GameObject::Floor(Floor {
                height: self.config.floor_height,
            }),
        )?;
        world.add(
            "Bird",
            GameObject::Bird(Bird::new(Vec2::new(
                self.config.bird_start_x,
                self.config.bird_start_y,
            ))),
        )?;
        world.add("PipeDetector", GameObject::PipeDetector(PipeDetector::new()))?;
        world.add("ScoreBoard", GameObject::ScoreBoard(ScoreBoard::default()))?;

        self.spawn_timer = self.config.pipe_interval;
        Ok(())
    }

    fn tick(&mut self, world: &mut World<GameObject>, delta_time: f32) -> Result<(), SceneError> {
        self.spawn_pipes(world, delta_time)?;
        self.scroll_pipes(world, delta_time)?;
        self.update_bird(world, delta_time)?;
        Ok(())
    }

    fn leave(&mut self, _world: &mut World<GameObject>) -> Result<(), SceneError> {
        // The round objects stay registered: the round-over scene owns
        // their removal now.
        self.detect_switch.set(false);
        Ok(())
    }

    fn detect_switch(&self) -> &DetectSwitch {
        &self.detect_switch
    }

    fn link(&self) -> Option<&str> {
        Some("done")
    }
}
