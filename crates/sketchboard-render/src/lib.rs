//! Sketchboard Render Library
//!
//! Surface abstraction and full-redraw renderer for Sketchboard, plus a
//! tiny-skia bitmap backend used for snapshots and export.

pub mod export;
mod pixmap;
mod renderer;
mod surface;

pub use pixmap::{PixmapSurface, Snapshot};
pub use renderer::{RenderResult, RenderStyle, Renderer, RendererError};
pub use surface::{LineCap, LineJoin, StrokeStyle, Surface};
