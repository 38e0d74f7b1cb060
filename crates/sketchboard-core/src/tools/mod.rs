//! Pointer interaction state machine: draw, pan, or select-and-drag.

use crate::camera::Camera;
use crate::geometry::distance;
use crate::history::History;
use crate::input::PointerEvent;
use crate::settings::{DEFAULT_PAN_THRESHOLD, Settings};
use crate::shapes::{Shape, ShapeId, ShapeKind, ShapeStyle};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Active interaction mode chosen from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Pointer drags pan the viewport.
    Pan,
    /// Pointer drags draw rectangles.
    #[default]
    Rectangle,
    /// Pointer drags draw circles.
    Circle,
}

impl Mode {
    /// The shape kind drawn in this mode, if any.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Mode::Pan => None,
            Mode::Rectangle => Some(ShapeKind::Rectangle),
            Mode::Circle => Some(ShapeKind::Circle),
        }
    }
}

/// In-progress path of a shape being drawn: the pointer-down point and, once
/// the pointer has moved, the latest position.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    kind: ShapeKind,
    start: Point,
    end: Option<Point>,
}

impl Draft {
    /// Start a draft at the given virtual point.
    pub fn new(kind: ShapeKind, start: Point) -> Self {
        Self {
            kind,
            start,
            end: None,
        }
    }

    /// Kind of shape being drawn.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Point where drawing started.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Record a pointer position as the second point, replacing any earlier one.
    pub fn extend(&mut self, point: Point) {
        self.end = Some(point);
    }

    /// Number of points recorded so far (one or two).
    pub fn point_count(&self) -> usize {
        1 + usize::from(self.end.is_some())
    }

    /// Both points, once the draft has two.
    pub fn points(&self) -> Option<[Point; 2]> {
        self.end.map(|end| [self.start, end])
    }

    /// Whether the draft has two distinct points and may be committed.
    pub fn is_committable(&self) -> bool {
        self.points()
            .is_some_and(|[a, b]| distance(a, b) > 0.0)
    }

    /// Build the shape this draft describes with the given style.
    pub fn to_shape(&self, style: ShapeStyle) -> Option<Shape> {
        self.points().map(|path| Shape::new(self.kind, path, style))
    }
}

/// State of the pointer interaction.
#[derive(Debug, Clone, Default)]
pub enum InteractionState {
    /// Waiting for a pointer-down.
    #[default]
    Idle,
    /// Drawing a new shape.
    Drawing(Draft),
    /// Panning the viewport; `last` is the last applied device position.
    Panning { last: Point },
    /// Moving a selected shape; `anchor` is the last virtual pointer position.
    Dragging { shape: ShapeId, anchor: Point },
}

/// Outcome of handling one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// The event changed nothing.
    None,
    /// A draft was started at this virtual point.
    BeginDraw { at: Point },
    /// The draft changed; the preview must be redrawn.
    ExtendPreview,
    /// The draft was committed as this shape.
    CommitShape(ShapeId),
    /// The draft was abandoned without committing.
    DiscardDraft,
    /// Panning started.
    BeginPan,
    /// The viewport was panned to this (clamped) offset.
    PanDelta { offset: Vec2 },
    /// This shape was selected and a drag started.
    BeginDrag(ShapeId),
    /// The dragged shape moved by this virtual delta.
    DragDelta { shape: ShapeId, delta: Vec2 },
    /// Dragging finished.
    EndDrag(ShapeId),
}

impl Action {
    /// Whether the model or view changed and a redraw is needed.
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Action::None | Action::BeginPan)
    }
}

/// Drives draw/pan/drag interactions from pointer events.
#[derive(Debug, Clone)]
pub struct Interaction {
    /// Current state.
    state: InteractionState,
    /// Minimum per-axis device travel before a pan move is applied.
    pan_threshold: f64,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(DEFAULT_PAN_THRESHOLD)
    }
}

impl Interaction {
    /// Create an idle state machine.
    pub fn new(pan_threshold: f64) -> Self {
        Self {
            state: InteractionState::Idle,
            pan_threshold,
        }
    }

    /// Current state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Check if an interaction is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, InteractionState::Idle)
    }

    /// The draft being drawn, if any.
    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            InteractionState::Drawing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Abandon an in-progress draft. Panning and dragging are left untouched.
    ///
    /// Returns true if a draft was discarded.
    pub fn discard_draft(&mut self) -> bool {
        if matches!(self.state, InteractionState::Drawing(_)) {
            log::debug!("Discarding draft");
            self.state = InteractionState::Idle;
            true
        } else {
            false
        }
    }

    /// Process one pointer event.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        settings: &Settings,
        history: &mut History,
        camera: &mut Camera,
    ) -> Action {
        match event {
            PointerEvent::Down {
                position,
                viewport_origin,
            } => self.pointer_down(position, viewport_origin, settings, history, camera),
            PointerEvent::Move {
                position,
                viewport_origin,
            } => self.pointer_move(position, viewport_origin, history, camera),
            PointerEvent::Up { .. } => self.pointer_up(settings, history),
        }
    }

    fn pointer_down(
        &mut self,
        position: Point,
        viewport_origin: Point,
        settings: &Settings,
        history: &mut History,
        camera: &Camera,
    ) -> Action {
        if self.is_active() {
            return Action::None;
        }

        // Pan takes precedence over selection.
        let Some(kind) = settings.mode.shape_kind() else {
            self.state = InteractionState::Panning { last: position };
            return Action::BeginPan;
        };

        let point = camera.to_virtual(position, viewport_origin);
        if let Some(id) = history.find_at(point).map(Shape::id) {
            history.select(Some(id));
            self.state = InteractionState::Dragging {
                shape: id,
                anchor: point,
            };
            log::debug!("Begin drag of {id}");
            return Action::BeginDrag(id);
        }

        history.clear_selection();
        self.state = InteractionState::Drawing(Draft::new(kind, point));
        Action::BeginDraw { at: point }
    }

    fn pointer_move(
        &mut self,
        position: Point,
        viewport_origin: Point,
        history: &mut History,
        camera: &mut Camera,
    ) -> Action {
        match &mut self.state {
            InteractionState::Idle => Action::None,
            InteractionState::Drawing(draft) => {
                draft.extend(camera.to_virtual(position, viewport_origin));
                Action::ExtendPreview
            }
            InteractionState::Panning { last } => {
                let delta = position - *last;
                if delta.x.abs() < self.pan_threshold && delta.y.abs() < self.pan_threshold {
                    return Action::None;
                }
                *last = position;
                Action::PanDelta {
                    offset: camera.apply_pan_delta(delta),
                }
            }
            InteractionState::Dragging { shape, anchor } => {
                let point = camera.to_virtual(position, viewport_origin);
                let delta = point - *anchor;
                *anchor = point;
                if !history.mutate_path(*shape, delta) {
                    return Action::None;
                }
                if delta != Vec2::ZERO {
                    // Redo entries predate the move.
                    history.invalidate_redo();
                }
                Action::DragDelta {
                    shape: *shape,
                    delta,
                }
            }
        }
    }

    fn pointer_up(&mut self, settings: &Settings, history: &mut History) -> Action {
        match std::mem::take(&mut self.state) {
            InteractionState::Idle => Action::None,
            InteractionState::Drawing(draft) => {
                if !draft.is_committable() {
                    return Action::DiscardDraft;
                }
                match draft.to_shape(settings.style()) {
                    Some(shape) => {
                        let id = shape.id();
                        if history.commit(shape) {
                            Action::CommitShape(id)
                        } else {
                            Action::DiscardDraft
                        }
                    }
                    None => Action::DiscardDraft,
                }
            }
            InteractionState::Panning { .. } => Action::None,
            InteractionState::Dragging { shape, .. } => {
                log::debug!("End drag of {shape}");
                Action::EndDrag(shape)
            }
        }
    }
}
