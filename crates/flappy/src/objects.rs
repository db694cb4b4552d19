//! Game objects stored in the world registry
//!
//! The registry is heterogeneous but the set of object kinds is fixed,
//! so it is expressed as a tagged enum. A scene that needs a specific
//! capability out of a lookup matches on the variant and treats a
//! mismatch as a missing collaborator; there is no downcasting.

use flappy_engine::prelude::{Button, Vec2};

/// Every kind of object the game registers in the world
#[derive(Debug)]
pub enum GameObject {
    /// Interactive UI button
    Button(Button),
    /// Scrolling pipe obstacle
    Pipe(Pipe),
    /// Tracker of the pipes currently alive in the scene
    PipeDetector(PipeDetector),
    /// Ground line
    Floor(Floor),
    /// The player bird
    Bird(Bird),
    /// Score tally
    ScoreBoard(ScoreBoard),
}

impl GameObject {
    /// The button capability, if this object is a button
    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Self::Button(button) => Some(button),
            _ => None,
        }
    }

    /// The pipe capability, if this object is a pipe
    pub fn as_pipe_mut(&mut self) -> Option<&mut Pipe> {
        match self {
            Self::Pipe(pipe) => Some(pipe),
            _ => None,
        }
    }

    /// The detector capability, if this object is a pipe detector
    pub fn as_pipe_detector(&self) -> Option<&PipeDetector> {
        match self {
            Self::PipeDetector(detector) => Some(detector),
            _ => None,
        }
    }

    /// The detector capability, mutably
    pub fn as_pipe_detector_mut(&mut self) -> Option<&mut PipeDetector> {
        match self {
            Self::PipeDetector(detector) => Some(detector),
            _ => None,
        }
    }

    /// The bird capability, if this object is the bird
    pub fn as_bird_mut(&mut self) -> Option<&mut Bird> {
        match self {
            Self::Bird(bird) => Some(bird),
            _ => None,
        }
    }

    /// The floor capability, if this object is the floor
    pub fn as_floor(&self) -> Option<&Floor> {
        match self {
            Self::Floor(floor) => Some(floor),
            _ => None,
        }
    }

    /// The score board capability, mutably
    pub fn as_score_board_mut(&mut self) -> Option<&mut ScoreBoard> {
        match self {
            Self::ScoreBoard(board) => Some(board),
            _ => None,
        }
    }
}

/// A scrolling pipe obstacle
///
/// Pipes are transient: the detector assigns each one a signature
/// number, and the pipe is registered in the world under `"Pipe{n}"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Number identifying this pipe; forms its registry signature
    pub signature_number: i32,

    /// Center position in scene coordinates
    pub position: Vec2,
}

impl Pipe {
    /// Registry signature for a pipe number
    pub fn signature(number: i32) -> String {
        format!("Pipe{number}")
    }
}

/// Tracks the pipes currently alive in the scene
///
/// The detector is the single source of truth for which pipe
/// signatures exist: it hands out signature numbers on spawn and
/// forgets them on cull, and the scene-exit cleanup walks its detected
/// list to remove every remaining pipe from the world.
#[derive(Debug, Default)]
pub struct PipeDetector {
    detected: Vec<i32>,
    next_signature: i32,
}

impl PipeDetector {
    /// Create a detector with no pipes
    pub fn new() -> Self {
        Self {
            detected: Vec::new(),
            next_signature: 1,
        }
    }

    /// Create a new pipe at the given position and record its signature
    pub fn spawn_pipe(&mut self, position: Vec2) -> Pipe {
        let signature_number = self.next_signature;
        self.next_signature += 1;
        self.detected.push(signature_number);
        Pipe {
            signature_number,
            position,
        }
    }

    /// Forget a pipe that has been removed from the world
    pub fn forget(&mut self, signature_number: i32) {
        self.detected.retain(|&n| n != signature_number);
    }

    /// Signature numbers of the pipes currently detected, in spawn order
    pub fn detected_pipes(&self) -> &[i32] {
        &self.detected
    }
}

/// The player bird
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Center position in scene coordinates
    pub position: Vec2,

    /// Vertical velocity (positive is downward)
    pub velocity_y: f32,

    /// Whether the bird is still alive
    pub alive: bool,
}

impl Bird {
    /// Create a bird at rest at the given position
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity_y: 0.0,
            alive: true,
        }
    }

    /// Integrate gravity over a frame
    pub fn fall(&mut self, gravity: f32, delta_time: f32) {
        self.velocity_y += gravity * delta_time;
        self.position.y += self.velocity_y * delta_time;
    }
}

/// Ground line of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    /// Y coordinate of the ground
    pub height: f32,
}

/// Score tally for the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    /// Pipes passed this round
    pub score: u32,
}

impl ScoreBoard {
    /// Count a passed pipe
    pub fn add_point(&mut self) {
        self.score += 1;
    }
}
