//! Round-over scene
//!
//! Entered when a round ends: swaps the "press" prompt for an Ok
//! button and, on leave, removes every object that existed only for
//! the duration of the round, including the pipes the detector is
//! still tracking. Nothing the round created may survive the
//! transition; a stale registry entry here is a leak.

use crate::objects::{GameObject, Pipe};
use flappy_engine::prelude::{Button, DetectSwitch, SceneError, SceneNode, Vec2, World};

/// Scene node shown when the round is over
///
/// Owns the list of registry signatures it is responsible for: `entry`
/// records exactly what it registers (plus the round objects it takes
/// over from the play scene), and `leave` removes exactly that list,
/// so the two can never drift apart.
#[derive(Debug, Default)]
pub struct DoneSceneNode {
    game_object_signatures: Vec<String>,
    detect_switch: DetectSwitch,
}

impl DoneSceneNode {
    /// Create the scene node in its inactive state
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry signatures this node currently owns, in recorded order
    pub fn game_object_signatures(&self) -> &[String] {
        &self.game_object_signatures
    }
}

impl SceneNode<GameObject> for DoneSceneNode {
    fn entry(&mut self, world: &mut World<GameObject>) -> Result<(), SceneError> {
        world.remove("PressButton")?;

        self.game_object_signatures.clear();
        self.game_object_signatures.push("OkButton".to_owned());
        self.game_object_signatures.push("Floor".to_owned());
        self.game_object_signatures.push("Bird".to_owned());
        self.game_object_signatures.push("PipeDetector".to_owned());
        self.game_object_signatures.push("ScoreBoard".to_owned());

        let mut ok_button = Button::new();
        ok_button.update_order = 6;
        ok_button.active = true;
        ok_button.texture = "OkButton".to_owned();
        let switch = self.detect_switch.clone();
        ok_button.set_on_activate(move || switch.set(true));
        ok_button.reduce_ratio = 0.95;
        ok_button.create_ui_body(Vec2::new(500.0, 400.0), 160.0, 60.0);

        world.add("OkButton", GameObject::Button(ok_button))?;

        Ok(())
    }

    fn leave(&mut self, world: &mut World<GameObject>) -> Result<(), SceneError> {
        let detector = world
            .get("PipeDetector")
            .and_then(GameObject::as_pipe_detector)
            .ok_or(SceneError::MissingCollaborator {
                signature: "PipeDetector",
                capability: "pipe detector",
            })?;

        let pipes: Vec<i32> = detector.detected_pipes().to_vec();
        for signature_number in pipes {
            world.remove(&Pipe::signature(signature_number))?;
        }

        for game_object_signature in &self.game_object_signatures {
            world.remove(game_object_signature)?;
        }

        self.detect_switch.set(false);

        Ok(())
    }

    fn detect_switch(&self) -> &DetectSwitch {
        &self.detect_switch
    }
}
