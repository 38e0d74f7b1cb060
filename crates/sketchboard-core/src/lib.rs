//! Sketchboard Core Library
//!
//! Platform-agnostic shape model, undo/redo history, pan camera and pointer
//! interaction state machine for the Sketchboard drawing surface.

pub mod camera;
pub mod canvas;
pub mod geometry;
pub mod history;
pub mod input;
pub mod settings;
pub mod shapes;
pub mod tools;

pub use camera::{Camera, DEFAULT_VIRTUAL_EXTENT};
pub use canvas::Canvas;
pub use history::History;
pub use input::PointerEvent;
pub use settings::{CanvasConfig, Settings};
pub use shapes::{ColorParseError, SerializableColor, Shape, ShapeId, ShapeKind, ShapeStyle};
pub use tools::{Action, Draft, Interaction, InteractionState, Mode};
