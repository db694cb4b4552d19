//! # Flappy Engine
//!
//! A minimal 2D game framework extracted from an arcade-style game:
//! a string-keyed game-object registry, a scene-node lifecycle with a
//! transition driver, and a small UI widget layer.
//!
//! ## Architecture
//!
//! ```text
//! SceneDirector (transitions)
//!      ↓
//! SceneNode (entry / tick / leave)
//!      ↓
//! World (string key → game object)
//! ```
//!
//! Scene nodes own the set of registry keys they create and guarantee
//! their removal on `leave`, so no stale entries survive a scene
//! transition. All state is confined to the game-loop thread; the
//! registry provides no internal locking.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod scene;
pub mod ui;
pub mod world;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::{
            math::{Rect, Vec2},
            time::Timer,
        },
        scene::{DetectSwitch, SceneDirector, SceneError, SceneNode},
        ui::{Button, ButtonState},
        world::{World, WorldError},
    };
}
