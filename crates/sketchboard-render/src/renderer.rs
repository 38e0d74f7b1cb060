//! Full-redraw renderer over a [`Surface`].

use crate::surface::{StrokeStyle, Surface};
use kurbo::{Affine, Rect};
use peniko::Color;
use sketchboard_core::camera::Camera;
use sketchboard_core::canvas::Canvas;
use sketchboard_core::geometry::distance;
use sketchboard_core::history::History;
use sketchboard_core::settings::Settings;
use sketchboard_core::shapes::{Shape, ShapeKind};
use sketchboard_core::tools::Draft;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Styling applied by the renderer on top of the shapes' own styles.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Stroke color for the selected shape.
    pub highlight_color: Color,
    /// Stroke width for the selected shape.
    pub highlight_width: f64,
    /// Dash pattern for the selected shape.
    pub highlight_dash: Vec<f64>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            highlight_color: Color::from_rgba8(255, 0, 0, 255),
            highlight_width: 3.0,
            highlight_dash: vec![5.0, 5.0],
        }
    }
}

impl RenderStyle {
    /// Set the highlight color.
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    /// Set the highlight stroke width.
    pub fn with_highlight_width(mut self, width: f64) -> Self {
        self.highlight_width = width;
        self
    }

    /// Set the highlight dash pattern.
    pub fn with_highlight_dash(mut self, dash: Vec<f64>) -> Self {
        self.highlight_dash = dash;
        self
    }

    /// Stroke used for the selected shape.
    pub fn highlight_stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(self.highlight_color.into(), self.highlight_width)
            .with_dash(self.highlight_dash.clone())
    }
}

/// Redraws the whole drawing onto a surface it owns.
///
/// The surface is supplied at construction, so there is no way to render
/// before one exists.
pub struct Renderer<S: Surface> {
    surface: S,
    style: RenderStyle,
}

impl<S: Surface> Renderer<S> {
    /// Create a renderer drawing onto `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            style: RenderStyle::default(),
        }
    }

    /// Replace the render style.
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Render the canvas: its draft preview if one is in progress, otherwise all shapes.
    pub fn render(&mut self, canvas: &Canvas) {
        match canvas.draft() {
            Some(draft) => self.render_preview(
                canvas.history(),
                canvas.camera(),
                draft,
                canvas.settings(),
            ),
            None => self.render_all(canvas.history(), canvas.camera()),
        }
    }

    /// Clear the whole virtual canvas and redraw every committed shape.
    pub fn render_all(&mut self, history: &History, camera: &Camera) {
        let extent = camera.extent();
        self.surface.set_transform(Affine::IDENTITY);
        self.surface.clear_rect(Rect::new(0.0, 0.0, extent, extent));
        self.surface.set_transform(camera.transform());

        let highlight = self.style.highlight_stroke();
        for shape in history.shapes() {
            if shape.selected {
                self.surface.set_stroke(&highlight);
            } else {
                self.surface.set_stroke(&StrokeStyle::from(&shape.style));
            }
            draw_shape(&mut self.surface, shape);
        }
    }

    /// Redraw everything, then the in-progress draft in the current settings' style.
    pub fn render_preview(
        &mut self,
        history: &History,
        camera: &Camera,
        draft: &Draft,
        settings: &Settings,
    ) {
        self.render_all(history, camera);
        if let Some(shape) = draft.to_shape(settings.style()) {
            self.surface.set_stroke(&StrokeStyle::from(&shape.style));
            draw_shape(&mut self.surface, &shape);
        }
    }
}

fn draw_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape) {
    let [a, b] = shape.path;
    match shape.kind {
        ShapeKind::Rectangle => surface.stroke_rect(Rect::from_points(a, b)),
        ShapeKind::Circle => surface.stroke_circle(a, distance(a, b)),
    }
}
