//! Pointer events delivered by the host windowing layer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in device coordinates.
///
/// `viewport_origin` is the device position of the drawing surface's top-left
/// corner at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        viewport_origin: Point,
    },
    Move {
        position: Point,
        viewport_origin: Point,
    },
    Up {
        position: Point,
        viewport_origin: Point,
    },
}

impl PointerEvent {
    /// Pointer-down at a device position over a viewport anchored at the device origin.
    pub fn down(position: Point) -> Self {
        Self::Down {
            position,
            viewport_origin: Point::ZERO,
        }
    }

    /// Pointer-move at a device position over a viewport anchored at the device origin.
    pub fn moved(position: Point) -> Self {
        Self::Move {
            position,
            viewport_origin: Point::ZERO,
        }
    }

    /// Pointer-up at a device position over a viewport anchored at the device origin.
    pub fn up(position: Point) -> Self {
        Self::Up {
            position,
            viewport_origin: Point::ZERO,
        }
    }

    /// Replace the viewport origin carried by this event.
    pub fn with_viewport_origin(self, origin: Point) -> Self {
        match self {
            Self::Down { position, .. } => Self::Down {
                position,
                viewport_origin: origin,
            },
            Self::Move { position, .. } => Self::Move {
                position,
                viewport_origin: origin,
            },
            Self::Up { position, .. } => Self::Up {
                position,
                viewport_origin: origin,
            },
        }
    }

    /// Device position of the pointer.
    pub fn position(&self) -> Point {
        match self {
            Self::Down { position, .. } | Self::Move { position, .. } | Self::Up { position, .. } => {
                *position
            }
        }
    }

    /// Device position of the viewport's top-left corner.
    pub fn viewport_origin(&self) -> Point {
        match self {
            Self::Down {
                viewport_origin, ..
            }
            | Self::Move {
                viewport_origin, ..
            }
            | Self::Up {
                viewport_origin, ..
            } => *viewport_origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let event = PointerEvent::moved(Point::new(5.0, 6.0)).with_viewport_origin(Point::new(1.0, 2.0));
        assert!(matches!(event, PointerEvent::Move { .. }));
        assert_eq!(event.position(), Point::new(5.0, 6.0));
        assert_eq!(event.viewport_origin(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_default_origin() {
        let event = PointerEvent::up(Point::new(5.0, 6.0));
        assert_eq!(event.viewport_origin(), Point::ZERO);
    }
}
