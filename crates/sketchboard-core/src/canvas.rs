//! Drawing session: shapes, camera, settings and interaction state.

use crate::camera::Camera;
use crate::history::History;
use crate::input::PointerEvent;
use crate::settings::{CanvasConfig, Settings};
use crate::shapes::{ColorParseError, SerializableColor};
use crate::tools::{Action, Draft, Interaction, Mode};
use kurbo::Size;

/// Runtime state of one drawing session.
///
/// All mutation goes through this type: pointer events from the host, and
/// toolbar calls. Every change raises a redraw request that the host picks up
/// with [`Canvas::take_redraw`] before rendering.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Committed shapes and redo buffer.
    history: History,
    /// Pan transform over the virtual canvas.
    camera: Camera,
    /// Toolbar settings for new shapes.
    settings: Settings,
    /// Pointer state machine.
    interaction: Interaction,
    /// Set when the model or view changed since the last render.
    needs_redraw: bool,
}

impl Canvas {
    /// Create a canvas with the default configuration.
    pub fn new(viewport: Size) -> Self {
        Self::with_config(&CanvasConfig::default(), viewport)
    }

    /// Create a canvas from a configuration.
    pub fn with_config(config: &CanvasConfig, viewport: Size) -> Self {
        Self {
            history: History::new(),
            camera: Camera::new(config.virtual_extent, viewport),
            settings: config.settings,
            interaction: Interaction::new(config.pan_threshold),
            needs_redraw: true,
        }
    }

    /// Feed one pointer event through the interaction state machine.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Action {
        let action = self.interaction.handle(
            event,
            &self.settings,
            &mut self.history,
            &mut self.camera,
        );
        if action.needs_redraw() {
            self.needs_redraw = true;
        }
        action
    }

    /// Set the interaction mode. An unfinished draft is discarded.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.interaction.discard_draft() {
            self.needs_redraw = true;
        }
        self.settings.mode = mode;
    }

    /// Set the stroke color for new shapes from a CSS hex string.
    pub fn set_color(&mut self, color: &str) -> Result<(), ColorParseError> {
        let color = SerializableColor::from_hex(color)?;
        self.set_stroke_color(color);
        Ok(())
    }

    /// Set the stroke color for new shapes.
    pub fn set_stroke_color(&mut self, color: SerializableColor) {
        self.settings.stroke_color = color;
    }

    /// Set the stroke width for new shapes. Non-positive widths are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        if !width.is_finite() || width <= 0.0 {
            log::warn!("Ignoring invalid stroke width {width}");
            return;
        }
        self.settings.stroke_width = width;
    }

    /// Undo the last commit. Returns true if anything changed.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            log::debug!("Undo ({} shapes left)", self.history.len());
            self.needs_redraw = true;
        }
        changed
    }

    /// Redo the last undone commit. Returns true if anything changed.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            log::debug!("Redo ({} shapes)", self.history.len());
            self.needs_redraw = true;
        }
        changed
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Resize the viewport; the view is recentered on the virtual canvas.
    pub fn resize(&mut self, viewport: Size) {
        self.camera.set_viewport_size(viewport);
        self.needs_redraw = true;
    }

    /// Check whether a redraw has been requested.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consume the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// The shape being drawn, if any.
    pub fn draft(&self) -> Option<&Draft> {
        self.interaction.draft()
    }
}
