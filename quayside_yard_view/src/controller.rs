// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::{Point, Size};
use quayside_event_state::gesture::{ClickTolerance, GestureEnd, GesturePhase, GestureState};
use quayside_hit::{Hit, hit_test};
use quayside_imaging::DrawSurface;
use quayside_render::{DisplayOptions, RenderFrame, Renderer};
use quayside_view2d::{ViewportDebugInfo, ViewportTransform, ZoomLimits};
use quayside_yard::{Section, Stack, Yard};

use crate::selection::YardSelection;

/// Receives selection changes caused by clicks.
///
/// Both methods default to doing nothing.
pub trait SelectionListener {
    /// The selected section changed; `None` means it was cleared.
    fn on_section_select(&mut self, section: Option<&Section>) {
        let _ = section;
    }

    /// The selected stack changed; `None` means it was cleared.
    fn on_stack_select(&mut self, stack: Option<&Stack>) {
        let _ = stack;
    }
}

/// A listener that ignores every notification.
impl SelectionListener for () {}

/// Zoom factors applied per wheel notch.
///
/// Zoom always anchors on the canvas center, not on the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelZoom {
    /// Factor for a negative `delta_y` (wheel away from the user).
    pub zoom_in: f64,
    /// Factor for a positive `delta_y`.
    pub zoom_out: f64,
}

impl WheelZoom {
    /// Factor for a wheel delta, or `None` for a zero or non-finite delta.
    #[must_use]
    pub fn factor(&self, delta_y: f64) -> Option<f64> {
        if delta_y < 0.0 {
            Some(self.zoom_in)
        } else if delta_y > 0.0 {
            Some(self.zoom_out)
        } else {
            None
        }
    }
}

impl Default for WheelZoom {
    fn default() -> Self {
        Self {
            zoom_in: 1.1,
            zoom_out: 0.9,
        }
    }
}

/// Construction-time settings of an [`InteractionController`].
#[derive(Clone, Debug, Default)]
pub struct ViewConfig {
    /// Bounds for every zoom change.
    pub zoom_limits: ZoomLimits,
    /// Pointer travel below which a press and release is a click.
    pub click_tolerance: ClickTolerance,
    /// Wheel zoom step.
    pub wheel: WheelZoom,
    /// Theme and occupancy configuration for drawing.
    pub renderer: Renderer,
}

/// Snapshot of controller state for debugging and inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerDebugInfo {
    /// Viewport state for the current canvas.
    pub viewport: ViewportDebugInfo,
    /// Gesture phase.
    pub phase: GesturePhase,
    /// Selection revision counter.
    pub selection_revision: u64,
    /// Whether a redraw is pending.
    pub redraw_pending: bool,
}

/// Stateful yard view reacting to pointer, wheel, and click input.
///
/// The controller owns the viewport and selection but not the drawing
/// surface. Input handlers only mutate state and mark the view dirty; the
/// host calls [`Self::take_redraw`] once per frame and, if it returns `true`,
/// [`Self::render`]. Any number of pointer moves within a frame therefore
/// cost a single redraw.
#[derive(Debug)]
pub struct InteractionController {
    yard: Arc<Yard>,
    transform: ViewportTransform,
    canvas: Size,
    gesture: GestureState,
    selection: YardSelection,
    client_filter: Option<String>,
    options: DisplayOptions,
    wheel: WheelZoom,
    renderer: Renderer,
    needs_redraw: bool,
}

impl InteractionController {
    /// Creates a controller with default settings, fitted to `yard`.
    #[must_use]
    pub fn new(yard: Arc<Yard>, canvas: Size) -> Self {
        Self::with_config(yard, canvas, ViewConfig::default())
    }

    /// Creates a controller with explicit settings, fitted to `yard`.
    #[must_use]
    pub fn with_config(yard: Arc<Yard>, canvas: Size, config: ViewConfig) -> Self {
        let mut view = Self {
            yard,
            transform: ViewportTransform::with_limits(config.zoom_limits),
            canvas,
            gesture: GestureState::new(config.click_tolerance),
            selection: YardSelection::new(),
            client_filter: None,
            options: DisplayOptions::default(),
            wheel: config.wheel,
            renderer: config.renderer,
            needs_redraw: true,
        };
        view.fit_to_yard();
        view
    }

    /// The current model.
    #[must_use]
    pub fn yard(&self) -> &Arc<Yard> {
        &self.yard
    }

    /// The current viewport.
    #[must_use]
    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    /// The canvas size used for input mapping.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &YardSelection {
        &self.selection
    }

    /// The active client filter.
    #[must_use]
    pub fn client_filter(&self) -> Option<&str> {
        self.client_filter.as_deref()
    }

    /// The active display options.
    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        self.options
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Returns whether a redraw was requested since the last call, and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Replaces the model between passes.
    ///
    /// Selections whose ids are missing from the new model are dropped
    /// without notifying listeners.
    pub fn set_yard(&mut self, yard: Arc<Yard>) {
        self.yard = yard;
        self.selection.retain_existing(&self.yard);
        self.needs_redraw = true;
    }

    /// Restricts occupancy and container coloring to one client.
    pub fn set_client_filter(&mut self, client: Option<&str>) {
        if self.client_filter.as_deref() != client {
            self.client_filter = client.map(String::from);
            self.needs_redraw = true;
        }
    }

    /// Sets which optional layers are drawn.
    pub fn set_display_options(&mut self, options: DisplayOptions) {
        if self.options != options {
            self.options = options;
            self.needs_redraw = true;
        }
    }

    /// Updates the canvas size after the host resized its surface.
    pub fn set_canvas_size(&mut self, canvas: Size) {
        if self.canvas != canvas {
            self.canvas = canvas;
            self.needs_redraw = true;
        }
    }

    /// Fits the whole yard into the canvas. A yard without extent is left as is.
    pub fn fit_to_yard(&mut self) {
        if let Some(bounds) = self.yard.world_bounds() {
            let max = self.transform.limits().max();
            self.transform.fit_to_bounds(bounds, self.canvas, max);
            self.needs_redraw = true;
        }
    }

    /// Resets zoom, pan, and rotation, keeping the yard centered.
    pub fn reset_view(&mut self) {
        self.transform.reset();
        self.needs_redraw = true;
    }

    /// Starts a gesture at screen position `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        self.gesture.pointer_down(pos);
    }

    /// Pans by the pointer delta while a button is held.
    ///
    /// Never changes the selection.
    pub fn pointer_move(&mut self, pos: Point) {
        let Some(delta) = self.gesture.pointer_move(pos) else {
            return;
        };
        if delta.x == 0.0 && delta.y == 0.0 {
            return;
        }
        self.transform.pan_by(delta);
        self.needs_redraw = true;
        #[cfg(feature = "tracing")]
        tracing::trace!(dx = delta.x, dy = delta.y, pan = ?self.transform.pan(), "pan");
    }

    /// Ends a gesture; a release within the click tolerance selects.
    pub fn pointer_up<L: SelectionListener + ?Sized>(&mut self, pos: Point, listener: &mut L) {
        if let GestureEnd::Click(at) = self.gesture.pointer_up(pos) {
            self.click(at, listener);
        }
    }

    /// Abandons the gesture when the pointer leaves the canvas.
    pub fn pointer_leave(&mut self) {
        self.gesture.cancel();
    }

    /// Zooms about the canvas center, whatever the gesture state.
    pub fn wheel(&mut self, delta_y: f64) {
        let Some(factor) = self.wheel.factor(delta_y) else {
            return;
        };
        let before = self.transform.zoom();
        self.transform.zoom_by(factor);
        if self.transform.zoom() != before {
            self.needs_redraw = true;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(factor, zoom = self.transform.zoom(), "wheel zoom");
    }

    /// Applies the toggle rules for a click at screen position `pos`.
    ///
    /// - On a stack: toggle the stack selection, notify `on_stack_select`.
    /// - On a section away from its stacks: toggle the section selection,
    ///   notify `on_section_select`.
    /// - Elsewhere: clear both, notify both with `None`.
    pub fn click<L: SelectionListener + ?Sized>(&mut self, pos: Point, listener: &mut L) {
        let yard = Arc::clone(&self.yard);
        let hit = hit_test(pos, self.canvas, &self.transform, &yard);
        #[cfg(feature = "tracing")]
        tracing::trace!(x = pos.x, y = pos.y, hit = ?hit.map(|h| describe(&h)), "click");
        match hit {
            Some(Hit::Stack { stack, .. }) => {
                let selected = self
                    .selection
                    .toggle_stack(&stack.id)
                    .is_some()
                    .then_some(stack);
                listener.on_stack_select(selected);
            }
            Some(Hit::Section(section)) => {
                let selected = self
                    .selection
                    .toggle_section(&section.id)
                    .is_some()
                    .then_some(section);
                listener.on_section_select(selected);
            }
            None => {
                self.selection.clear();
                listener.on_section_select(None);
                listener.on_stack_select(None);
            }
        }
        self.needs_redraw = true;
    }

    /// Draws the current state onto `surface`.
    ///
    /// The surface should match [`Self::canvas_size`] so that clicks land
    /// where things were drawn.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let frame = RenderFrame {
            yard: &self.yard,
            transform: &self.transform,
            selected_section: self.selection.section(),
            selected_stack: self.selection.stack(),
            options: self.options,
            client_filter: self.client_filter.as_deref(),
        };
        self.renderer.draw(surface, &frame);
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            viewport: self.transform.debug_info(self.canvas),
            phase: self.gesture.phase(),
            selection_revision: self.selection.revision(),
            redraw_pending: self.needs_redraw,
        }
    }
}

#[cfg(feature = "tracing")]
fn describe<'a>(hit: &Hit<'a>) -> &'a str {
    match hit.stack() {
        Some(stack) => &stack.id,
        None => &hit.section().id,
    }
}
