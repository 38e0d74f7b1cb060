//! Shape definitions for the drawing surface.

mod color;

pub use color::{ColorParseError, SerializableColor};

use crate::geometry::{distance, point_in_circle, point_in_rect};
use kurbo::{BezPath, Circle, Point, Rect, Shape as KurboShape, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// The kinds of shape that can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned rectangle; the path holds two opposite corners.
    Rectangle,
    /// Circle; the path holds the center and a point on the circumference.
    Circle,
}

/// Style properties for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
}

impl ShapeStyle {
    pub fn new(stroke_color: SerializableColor, stroke_width: f64) -> Self {
        Self {
            stroke_color,
            stroke_width,
        }
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new(SerializableColor::black(), 1.0)
    }
}

/// A committed (or previewed) shape.
///
/// `path` always holds two points in virtual-canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// What the two path points describe.
    pub kind: ShapeKind,
    /// Style the shape was drawn with.
    pub style: ShapeStyle,
    /// Defining points (corners, or center and edge point).
    pub path: [Point; 2],
    /// Whether this shape is the current selection.
    #[serde(default)]
    pub selected: bool,
}

impl Shape {
    /// Create a new unselected shape.
    pub fn new(kind: ShapeKind, path: [Point; 2], style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            style,
            path,
            selected: false,
        }
    }

    /// Create a rectangle from two opposite corners.
    pub fn rectangle(corner1: Point, corner2: Point, style: ShapeStyle) -> Self {
        Self::new(ShapeKind::Rectangle, [corner1, corner2], style)
    }

    /// Create a circle from its center and a point on the circumference.
    pub fn circle(center: Point, edge_point: Point, style: ShapeStyle) -> Self {
        Self::new(ShapeKind::Circle, [center, edge_point], style)
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Whether both path points coincide (such shapes are never committed).
    pub fn is_degenerate(&self) -> bool {
        distance(self.path[0], self.path[1]) <= 0.0
    }

    /// Circle radius (distance between the two path points).
    pub fn radius(&self) -> f64 {
        distance(self.path[0], self.path[1])
    }

    /// Check if a point (in virtual coordinates) lies inside this shape.
    pub fn contains(&self, point: Point) -> bool {
        match self.kind {
            ShapeKind::Rectangle => point_in_rect(point, self.path[0], self.path[1]),
            ShapeKind::Circle => point_in_circle(point, self.path[0], self.path[1]),
        }
    }

    /// Translate both path points by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.path {
            *point += delta;
        }
    }

    /// Get the bounding box in virtual coordinates.
    pub fn bounds(&self) -> Rect {
        match self.kind {
            ShapeKind::Rectangle => Rect::from_points(self.path[0], self.path[1]),
            ShapeKind::Circle => {
                let r = self.radius();
                let c = self.path[0];
                Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
            }
        }
    }

    /// Get the outline as a bezier path.
    pub fn to_path(&self) -> BezPath {
        match self.kind {
            ShapeKind::Rectangle => self.bounds().to_path(0.1),
            ShapeKind::Circle => Circle::new(self.path[0], self.radius()).to_path(0.1),
        }
    }
}
