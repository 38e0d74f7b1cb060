//! Camera module mapping device coordinates onto the virtual canvas.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Default side length of the square virtual canvas.
pub const DEFAULT_VIRTUAL_EXTENT: f64 = 3000.0;

/// Camera manages the pan offset of the viewport over the virtual canvas.
///
/// The virtual canvas is a fixed square of side `extent`. The viewport is the
/// visible window into it and always stays fully inside it: the offset is kept
/// within `[-(extent - width), 0] x [-(extent - height), 0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), always non-positive.
    offset: Vec2,
    /// Visible viewport size, each dimension clamped to the extent.
    viewport: Size,
    /// Side length of the virtual canvas.
    extent: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_VIRTUAL_EXTENT, Size::new(800.0, 600.0))
    }
}

impl Camera {
    /// Create a camera centered over the virtual canvas.
    pub fn new(extent: f64, viewport: Size) -> Self {
        let extent = extent.max(0.0);
        let mut camera = Self {
            offset: Vec2::ZERO,
            viewport: clamp_viewport(viewport, extent),
            extent,
        };
        camera.center();
        camera
    }

    /// Current pan offset.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Visible viewport size (after clamping to the extent).
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Side length of the virtual canvas.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts virtual-canvas coordinates to viewport coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset)
    }

    /// Convert a device-space pointer position to virtual-canvas coordinates.
    ///
    /// `viewport_origin` is the device position of the viewport's top-left corner.
    pub fn to_virtual(&self, device: Point, viewport_origin: Point) -> Point {
        Point::new(
            device.x - viewport_origin.x - self.offset.x,
            device.y - viewport_origin.y - self.offset.y,
        )
    }

    /// Convert a virtual-canvas point to viewport coordinates.
    pub fn to_viewport(&self, virtual_point: Point) -> Point {
        self.transform() * virtual_point
    }

    /// Pan by a device-space delta and return the clamped offset.
    ///
    /// Panning stops silently at the canvas edges.
    pub fn apply_pan_delta(&mut self, delta: Vec2) -> Vec2 {
        self.offset = self.clamp_offset(self.offset + delta);
        self.offset
    }

    /// Change the viewport size and recenter over the virtual canvas.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = clamp_viewport(viewport, self.extent);
        self.center();
    }

    /// The visible window as fractions of the virtual canvas, for minimap display.
    pub fn viewport_indicator(&self) -> Rect {
        if self.extent <= 0.0 {
            return Rect::ZERO;
        }
        let x0 = -self.offset.x / self.extent;
        let y0 = -self.offset.y / self.extent;
        Rect::new(
            x0,
            y0,
            x0 + self.viewport.width / self.extent,
            y0 + self.viewport.height / self.extent,
        )
    }

    fn center(&mut self) {
        self.offset = Vec2::new(
            -(self.extent - self.viewport.width) / 2.0,
            -(self.extent - self.viewport.height) / 2.0,
        );
    }

    fn clamp_offset(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            offset.x.clamp(-(self.extent - self.viewport.width), 0.0),
            offset.y.clamp(-(self.extent - self.viewport.height), 0.0),
        )
    }
}

fn clamp_viewport(viewport: Size, extent: f64) -> Size {
    let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, extent) };
    Size::new(clamp(viewport.width), clamp(viewport.height))
}
