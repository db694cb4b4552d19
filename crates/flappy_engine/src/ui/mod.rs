//! UI widget layer
//!
//! Interactive controls that live in the world registry alongside the
//! other game objects. Rendering and input backends are external; the
//! widgets expose press/release entry points and a render body.

mod button;

pub use button::{ActivateAction, Button, ButtonState};
