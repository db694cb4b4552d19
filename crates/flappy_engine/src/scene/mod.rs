//! Scene lifecycle and transitions
//!
//! A scene node is a lifecycle-bound unit of game behavior: `entry`
//! sets up the objects the scene needs, `tick` runs per-frame logic,
//! and `leave` guarantees removal of everything the scene (and its
//! collaborators) put into the world registry.
//!
//! The [`SceneDirector`] drives transitions the way the game's main
//! loop does: it ticks the current scene once per frame and, when the
//! scene raises its detect switch, leaves it and enters the linked
//! scene. A scene with no link ends the session.
//!
//! ```text
//! Inactive → entry() → Active → leave() → Inactive
//! ```
//!
//! `entry`/`leave` run to completion on the game-loop thread; there is
//! no re-entrancy and no intermediate state.

use crate::world::{World, WorldError};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Scene lifecycle errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// Registry operation failed
    #[error("world registry error: {0}")]
    World(#[from] WorldError),

    /// A collaborator object the scene depends on is absent or of the
    /// wrong kind; fatal for the current transition
    #[error("missing collaborator: expected {capability} under signature '{signature}'")]
    MissingCollaborator {
        /// Registry signature the scene looked up
        signature: &'static str,
        /// Capability the scene expected the object to have
        capability: &'static str,
    },

    /// A scene link points at a scene the director does not know
    #[error("unknown scene '{0}'")]
    UnknownScene(String),
}

/// Shared confirmation toggle
///
/// A scene-wide boolean raised by a user confirmation action (a button
/// callback) and read by the director to drive the next transition.
/// Cloning yields another handle to the same flag. Handles are
/// explicitly passed to whoever needs them, so each test can use an
/// isolated flag.
#[derive(Debug, Clone, Default)]
pub struct DetectSwitch(Rc<Cell<bool>>);

impl DetectSwitch {
    /// Create a new flag, initially false
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag
    pub fn set(&self, value: bool) {
        self.0.set(value);
    }

    /// Read the flag
    pub fn get(&self) -> bool {
        self.0.get()
    }
}

/// Scene lifecycle trait
///
/// Implement this for each scene of the game. The director calls
/// `entry` exactly once before any `tick`, and `leave` exactly once
/// after the scene raises its detect switch. Calling `entry` twice
/// without an intervening `leave` is a sequencing bug; registry
/// duplicate checks surface it as an error.
pub trait SceneNode<O> {
    /// Enter the scene: register the objects it owns
    fn entry(&mut self, world: &mut World<O>) -> Result<(), SceneError>;

    /// Per-frame update while the scene is active
    fn tick(&mut self, _world: &mut World<O>, _delta_time: f32) -> Result<(), SceneError> {
        Ok(())
    }

    /// Leave the scene: remove every object it is responsible for
    fn leave(&mut self, world: &mut World<O>) -> Result<(), SceneError>;

    /// The scene's confirmation toggle, read by the director
    fn detect_switch(&self) -> &DetectSwitch;

    /// Name of the scene to enter after this one, if any
    fn link(&self) -> Option<&str> {
        None
    }
}

/// Drives scene transitions over a shared world registry
///
/// Owns the named scene nodes and the current selection. Lifecycle
/// errors abort the transition and propagate to the caller; they are
/// scene-sequencing bugs, not recoverable conditions.
pub struct SceneDirector<O> {
    scenes: HashMap<String, Box<dyn SceneNode<O>>>,
    current: Option<String>,
}

impl<O> Default for SceneDirector<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> SceneDirector<O> {
    /// Create a director with no scenes
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            current: None,
        }
    }

    /// Register a scene under a name
    pub fn add_scene(&mut self, name: impl Into<String>, scene: Box<dyn SceneNode<O>>) {
        self.scenes.insert(name.into(), scene);
    }

    /// Enter the named scene and make it current
    pub fn start(&mut self, name: &str, world: &mut World<O>) -> Result<(), SceneError> {
        let scene = self
            .scenes
            .get_mut(name)
            .ok_or_else(|| SceneError::UnknownScene(name.to_owned()))?;
        log::info!("Entering scene '{}'", name);
        scene.entry(world)?;
        self.current = Some(name.to_owned());
        Ok(())
    }

    /// Run one frame: tick the current scene and follow its link if
    /// its detect switch was raised
    ///
    /// Does nothing once the session has ended.
    pub fn step(&mut self, world: &mut World<O>, delta_time: f32) -> Result<(), SceneError> {
        let Some(name) = self.current.clone() else {
            return Ok(());
        };
        // Scene names in `current` always come from `scenes`
        let scene = self
            .scenes
            .get_mut(&name)
            .ok_or_else(|| SceneError::UnknownScene(name.clone()))?;

        scene.tick(world, delta_time)?;

        if !scene.detect_switch().get() {
            return Ok(());
        }

        log::info!("Leaving scene '{}'", name);
        scene.leave(world)?;
        let next = scene.link().map(str::to_owned);

        match next {
            Some(next) => self.start(&next, world),
            None => {
                log::info!("Scene '{}' has no link; session over", name);
                self.current = None;
                Ok(())
            }
        }
    }

    /// Whether a scene is currently active
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Name of the current scene, if any
    pub fn current_scene(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts lifecycle calls; leaves raise nothing of their own.
    struct CountingScene {
        switch: DetectSwitch,
        link: Option<String>,
        entries: Rc<Cell<u32>>,
        leaves: Rc<Cell<u32>>,
    }

    impl CountingScene {
        fn new(link: Option<&str>) -> (Self, Rc<Cell<u32>>, Rc<Cell<u32>>, DetectSwitch) {
            let entries = Rc::new(Cell::new(0));
            let leaves = Rc::new(Cell::new(0));
            let switch = DetectSwitch::new();
            let scene = Self {
                switch: switch.clone(),
                link: link.map(str::to_owned),
                entries: entries.clone(),
                leaves: leaves.clone(),
            };
            (scene, entries, leaves, switch)
        }
    }

    impl SceneNode<()> for CountingScene {
        fn entry(&mut self, _world: &mut World<()>) -> Result<(), SceneError> {
            self.entries.set(self.entries.get() + 1);
            Ok(())
        }

        fn leave(&mut self, _world: &mut World<()>) -> Result<(), SceneError> {
            self.leaves.set(self.leaves.get() + 1);
            self.switch.set(false);
            Ok(())
        }

        fn detect_switch(&self) -> &DetectSwitch {
            &self.switch
        }

        fn link(&self) -> Option<&str> {
            self.link.as_deref()
        }
    }

    #[test]
    fn test_detect_switch_handles_share_state() {
        let switch = DetectSwitch::new();
        let other = switch.clone();

        assert!(!other.get());
        switch.set(true);
        assert!(other.get());
    }

    #[test]
    fn test_start_enters_scene() {
        let mut world = World::new();
        let mut director = SceneDirector::new();
        let (scene, entries, _, _) = CountingScene::new(None);
        director.add_scene("ready", Box::new(scene));

        director.start("ready", &mut world).unwrap();

        assert_eq!(entries.get(), 1);
        assert_eq!(director.current_scene(), Some("ready"));
    }

    #[test]
    fn test_start_unknown_scene_fails() {
        let mut world = World::new();
        let mut director: SceneDirector<()> = SceneDirector::new();

        let err = director.start("nowhere", &mut world).unwrap_err();
        assert_eq!(err, SceneError::UnknownScene("nowhere".to_owned()));
    }

    #[test]
    fn test_step_follows_link_when_switch_raised() {
        let mut world = World::new();
        let mut director = SceneDirector::new();
        let (first, _, first_leaves, first_switch) = CountingScene::new(Some("second"));
        let (second, second_entries, _, _) = CountingScene::new(None);
        director.add_scene("first", Box::new(first));
        director.add_scene("second", Box::new(second));
        director.start("first", &mut world).unwrap();

        // No switch raised: stays put
        director.step(&mut world, 1.0 / 60.0).unwrap();
        assert_eq!(director.current_scene(), Some("first"));

        first_switch.set(true);
        director.step(&mut world, 1.0 / 60.0).unwrap();

        assert_eq!(first_leaves.get(), 1);
        assert_eq!(second_entries.get(), 1);
        assert_eq!(director.current_scene(), Some("second"));
    }

    #[test]
    fn test_step_without_link_ends_session() {
        let mut world = World::new();
        let mut director = SceneDirector::new();
        let (only, _, leaves, switch) = CountingScene::new(None);
        director.add_scene("only", Box::new(only));
        director.start("only", &mut world).unwrap();

        switch.set(true);
        director.step(&mut world, 1.0 / 60.0).unwrap();

        assert_eq!(leaves.get(), 1);
        assert!(!director.is_active());

        // Further steps are no-ops
        director.step(&mut world, 1.0 / 60.0).unwrap();
        assert_eq!(leaves.get(), 1);
    }
}
