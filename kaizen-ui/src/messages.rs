use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1.0 for left, 1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Keys the interactive widgets respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    /// Focuses the header search.
    Slash,
    Other,
}

impl NavKey {
    /// Map a platform key name (`"ArrowLeft"`, `"ArrowRight"`, ...).
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            "/" => NavKey::Slash,
            _ => NavKey::Other,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            NavKey::ArrowLeft => Some(Direction::Left),
            NavKey::ArrowRight => Some(Direction::Right),
            NavKey::Slash | NavKey::Other => None,
        }
    }
}

/// Pointer input for rails and hover widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMessage {
    Down { id: i32, x: f32 },
    Move { id: i32, x: f32 },
    Up { id: i32 },
    Cancel { id: i32 },
}

/// Platform inputs forwarded to a scroll rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RailMessage {
    Wheel { delta_x: f32, delta_y: f32 },
    Pointer(PointerMessage),
    Scrolled { scroll_left: f32 },
    Resized { client_width: f32, scroll_width: f32 },
    Key(NavKey, Instant),
    /// Frame-synchronized tick for smooth programmatic scrolls
    Tick(Instant),
}
