//! Drawable 2D surface abstraction.

use kurbo::{Affine, Point, Rect, Size};
use sketchboard_core::shapes::{SerializableColor, ShapeStyle};

/// Shape of stroke endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Shape of stroke corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Stroke parameters applied to subsequent stroke calls.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: SerializableColor,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    /// Alternating on/off lengths; empty means solid.
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    /// A solid stroke with round caps and joins.
    pub fn solid(color: SerializableColor, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
            dash: Vec::new(),
        }
    }

    /// Set the dash pattern.
    pub fn with_dash(mut self, dash: Vec<f64>) -> Self {
        self.dash = dash;
        self
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

impl From<&ShapeStyle> for StrokeStyle {
    fn from(style: &ShapeStyle) -> Self {
        Self::solid(style.stroke_color, style.stroke_width)
    }
}

/// A 2D surface the renderer draws onto.
///
/// Coordinates passed to the drawing calls are transformed by the current
/// transform set with [`Surface::set_transform`].
pub trait Surface {
    /// Size of the surface in pixels.
    fn size(&self) -> Size;

    /// Reset the given rectangle to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Set the stroke used by subsequent stroke calls.
    fn set_stroke(&mut self, style: &StrokeStyle);

    /// Stroke an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect);

    /// Stroke a full circle.
    fn stroke_circle(&mut self, center: Point, radius: f64);
}
