//! Button widget - interactive clickable buttons

use crate::foundation::math::{Rect, Vec2};
use std::fmt;

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal resting state
    Normal,
    /// Button is being pressed
    Pressed,
}

/// Activation callback invoked when the button is clicked
pub type ActivateAction = Box<dyn FnMut()>;

/// UI button game object
///
/// Configured the way the game's scenes build buttons: an update
/// order for draw/update priority, a texture signature for the visual,
/// a reduce ratio applied to the body while pressed, and an activation
/// callback fired on release inside the body.
pub struct Button {
    /// Draw/update priority (higher updates later)
    pub update_order: i32,

    /// Whether the button reacts to input
    pub active: bool,

    /// Texture signature for the resting visual
    pub texture: String,

    /// Scale applied to the body while pressed
    pub reduce_ratio: f32,

    state: ButtonState,
    body: Option<Rect>,
    on_activate: Option<ActivateAction>,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            update_order: 0,
            active: true,
            texture: String::new(),
            reduce_ratio: 1.0,
            state: ButtonState::Normal,
            body: None,
            on_activate: None,
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("update_order", &self.update_order)
            .field("active", &self.active)
            .field("texture", &self.texture)
            .field("reduce_ratio", &self.reduce_ratio)
            .field("state", &self.state)
            .field("body", &self.body)
            .field("has_action", &self.on_activate.is_some())
            .finish()
    }
}

impl Button {
    /// Create a button with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the activation callback
    pub fn set_on_activate(&mut self, action: impl FnMut() + 'static) {
        self.on_activate = Some(Box::new(action));
    }

    /// Create the clickable body from a center point and full extents
    pub fn create_ui_body(&mut self, center: Vec2, width: f32, height: f32) {
        self.body = Some(Rect::from_center_extents(center, width, height));
    }

    /// Current state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// The body as it should be drawn: reduced while pressed
    pub fn render_body(&self) -> Option<Rect> {
        self.body.map(|body| {
            if self.state == ButtonState::Pressed {
                body.scaled(self.reduce_ratio)
            } else {
                body
            }
        })
    }

    /// Whether a point lies inside the clickable body
    pub fn contains(&self, point: Vec2) -> bool {
        self.body.is_some_and(|body| body.contains(point))
    }

    /// Handle a press at the given point
    pub fn press(&mut self, point: Vec2) {
        if self.active && self.contains(point) {
            self.state = ButtonState::Pressed;
        }
    }

    /// Handle a release at the given point
    ///
    /// Fires the activation callback when the button was pressed and
    /// the release lands inside the body.
    pub fn release(&mut self, point: Vec2) {
        let was_pressed = self.state == ButtonState::Pressed;
        self.state = ButtonState::Normal;
        if was_pressed && self.active && self.contains(point) {
            self.activate();
        }
    }

    /// Invoke the activation callback directly
    pub fn activate(&mut self) {
        if let Some(action) = self.on_activate.as_mut() {
            action();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn test_button() -> Button {
        let mut button = Button::new();
        button.create_ui_body(Vec2::new(500.0, 400.0), 160.0, 60.0);
        button
    }

    #[test]
    fn test_press_release_inside_fires_action() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut button = test_button();
        button.set_on_activate(move || counter.set(counter.get() + 1));

        button.press(Vec2::new(500.0, 400.0));
        assert_eq!(button.state(), ButtonState::Pressed);
        button.release(Vec2::new(510.0, 410.0));

        assert_eq!(fired.get(), 1);
        assert_eq!(button.state(), ButtonState::Normal);
    }

    #[test]
    fn test_release_outside_does_not_fire() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let mut button = test_button();
        button.set_on_activate(move || flag.set(true));

        button.press(Vec2::new(500.0, 400.0));
        button.release(Vec2::new(0.0, 0.0));

        assert!(!fired.get());
    }

    #[test]
    fn test_inactive_button_ignores_press() {
        let mut button = test_button();
        button.active = false;

        button.press(Vec2::new(500.0, 400.0));

        assert_eq!(button.state(), ButtonState::Normal);
    }

    #[test]
    fn test_render_body_reduced_while_pressed() {
        let mut button = test_button();
        button.reduce_ratio = 0.95;

        button.press(Vec2::new(500.0, 400.0));
        let body = button.render_body().unwrap();

        assert_relative_eq!(body.width, 152.0);
        assert_relative_eq!(body.height, 57.0);
        assert_eq!(body.center, Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_activate_without_action_is_noop() {
        let mut button = test_button();
        button.activate(); // nothing registered; must not panic
    }
}
