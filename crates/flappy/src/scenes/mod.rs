//! Scene nodes of the game
//!
//! Two scenes make up a session: the active round (`play`) and the
//! round-over confirmation (`done`). The play scene hands its round
//! objects over to the done scene, which removes every one of them on
//! the way out.

pub mod done;
pub mod play;

pub use done::DoneSceneNode;
pub use play::PlaySceneNode;
