//! Pointer input tracking for winit windows
//!
//! This module converts winit `WindowEvent`s into the pointer events a
//! document dispatches: moves, primary button presses and releases, and clicks
//! synthesized from a press and release that stay close together.

use rg_dom::{Point, PointerEvent};
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Maximum pointer travel between press and release that still counts as a click
pub const CLICK_SLOP: f32 = 4.0;

/// Tracks the primary pointer across window events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current cursor position in window coordinates, if known
    pub cursor_position: Option<Point>,
    /// Where the primary button went down, while it is held
    press_origin: Option<Point>,
    /// Whether the pointer left the slop area since the press
    travelled: bool,
}

impl InputState {
    /// Create a new input state with no active input
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the primary button is held
    pub fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Process a winit WindowEvent and return the pointer events it produces
    ///
    /// Only the left mouse button is tracked; other events produce nothing.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Vec<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                vec![self.cursor_moved(Point::new(position.x as f32, position.y as f32))]
            }
            WindowEvent::CursorLeft { .. } => self.cursor_left().into_iter().collect(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.primary_button(*state),
            _ => Vec::new(),
        }
    }

    /// Record a cursor move
    pub fn cursor_moved(&mut self, position: Point) -> PointerEvent {
        self.cursor_position = Some(position);
        if let Some(origin) = self.press_origin {
            let dx = position.x - origin.x;
            let dy = position.y - origin.y;
            if dx * dx + dy * dy > CLICK_SLOP * CLICK_SLOP {
                self.travelled = true;
            }
        }
        PointerEvent::Move { position }
    }

    /// Record the cursor leaving the window
    ///
    /// A held button is treated as released where the cursor was last seen.
    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        let position = self.cursor_position.take()?;
        self.press_origin.take()?;
        log::debug!("cursor left the window while pressed");
        Some(PointerEvent::Release { position })
    }

    /// Record a primary button transition
    pub fn primary_button(&mut self, state: ElementState) -> Vec<PointerEvent> {
        let Some(position) = self.cursor_position else {
            return Vec::new();
        };

        match state {
            ElementState::Pressed => {
                self.press_origin = Some(position);
                self.travelled = false;
                vec![PointerEvent::Press { position }]
            }
            ElementState::Released => {
                let mut events = vec![PointerEvent::Release { position }];
                if self.press_origin.take().is_some() && !self.travelled {
                    events.push(PointerEvent::Click { position });
                }
                events
            }
        }
    }
}
