// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Render: paint a yard onto a [`DrawSurface`].
//!
//! [`Renderer::draw`] is a pure function of its inputs. It clears the
//! surface, installs the viewport's world→screen transform, and paints in
//! this order:
//!
//! 1. the background grid (fixed world spacing, so density follows zoom),
//! 2. sections: translucent fill, border, name,
//! 3. stacks: tint (layout override or occupancy level), occupancy overlay
//!    rising from the bottom edge, border, labels,
//! 4. occupied container slots, colored per client and dimmed when the
//!    active client filter excludes them.
//!
//! The transform installed on the surface is exactly
//! [`ViewportTransform::affine`], the same mapping the hit tester inverts,
//! so a click always lands on what was drawn under it.
//!
//! ```rust
//! use kurbo::Size;
//! use quayside_imaging::RecordingSurface;
//! use quayside_render::{RenderFrame, Renderer};
//! use quayside_view2d::ViewportTransform;
//! use quayside_yard::Yard;
//!
//! let yard = Yard::default();
//! let view = ViewportTransform::new();
//! let mut surface = RecordingSurface::new(Size::new(320.0, 240.0));
//!
//! Renderer::default().draw(&mut surface, &RenderFrame::new(&yard, &view));
//! assert!(!surface.ops().is_empty());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `debug` span around every draw pass.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod theme;

use alloc::format;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect};
use quayside_imaging::{DrawSurface, TextStyle};
use quayside_view2d::ViewportTransform;
use quayside_yard::{OccupancyEngine, Section, Stack, StackTint, Yard};

pub use theme::{ClientPalette, ContainerFootprint, Theme};

/// Upper bound on grid lines per axis; a denser grid is skipped.
const MAX_GRID_LINES: f64 = 4096.0;

/// Which optional layers to paint. All default to `true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Background grid.
    pub show_grid: bool,
    /// Section names and stack labels.
    pub show_labels: bool,
    /// Occupancy overlay on stacks.
    pub show_occupancy: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_labels: true,
            show_occupancy: true,
        }
    }
}

/// Inputs of one draw pass.
#[derive(Clone, Copy, Debug)]
pub struct RenderFrame<'a> {
    /// Model to paint.
    pub yard: &'a Yard,
    /// Current view.
    pub transform: &'a ViewportTransform,
    /// Id of the selected section, if any.
    pub selected_section: Option<&'a str>,
    /// Id of the selected stack, if any.
    pub selected_stack: Option<&'a str>,
    /// Optional layers.
    pub options: DisplayOptions,
    /// Restrict occupancy to one client's containers.
    pub client_filter: Option<&'a str>,
}

impl<'a> RenderFrame<'a> {
    /// A frame with no selection, no client filter, and default options.
    #[must_use]
    pub fn new(yard: &'a Yard, transform: &'a ViewportTransform) -> Self {
        Self {
            yard,
            transform,
            selected_section: None,
            selected_stack: None,
            options: DisplayOptions::default(),
            client_filter: None,
        }
    }
}

/// Paints yards with a fixed theme and occupancy configuration.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    theme: Theme,
    occupancy: OccupancyEngine,
}

impl Renderer {
    /// Creates a renderer.
    #[must_use]
    pub fn new(theme: Theme, occupancy: OccupancyEngine) -> Self {
        Self { theme, occupancy }
    }

    /// The theme in use.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The occupancy engine in use.
    #[must_use]
    pub fn occupancy(&self) -> &OccupancyEngine {
        &self.occupancy
    }

    /// Paints `frame` onto `surface`.
    ///
    /// Keeps no state between calls; identical inputs produce identical
    /// operations.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, frame: &RenderFrame<'_>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "yard_draw",
            yard = %frame.yard.id,
            sections = frame.yard.sections.len(),
            zoom = frame.transform.zoom(),
        )
        .entered();

        let canvas = surface.size();
        surface.set_transform(Affine::IDENTITY);
        surface.clear(self.theme.background);
        surface.set_transform(frame.transform.affine(canvas));

        // Stroke widths are given in screen pixels.
        let px = 1.0 / frame.transform.zoom();

        if frame.options.show_grid {
            self.draw_grid(surface, frame.transform.visible_world_rect(canvas), px);
        }
        for section in &frame.yard.sections {
            let selected = frame.selected_section == Some(section.id.as_str());
            self.draw_section(surface, section, selected, frame.options, px);
        }
        for stack in frame.yard.stacks() {
            self.draw_stack(surface, frame, stack, px);
        }
        for stack in frame.yard.stacks() {
            self.draw_containers(surface, stack, frame.client_filter);
        }
    }

    fn draw_grid<S: DrawSurface + ?Sized>(&self, surface: &mut S, visible: Rect, px: f64) {
        let spacing = self.theme.grid_spacing;
        if !(spacing > 0.0) {
            return;
        }
        if visible.width() / spacing > MAX_GRID_LINES || visible.height() / spacing > MAX_GRID_LINES
        {
            return;
        }
        let half = self.theme.grid_line_px * px * 0.5;
        let color = self.theme.grid;

        for x in grid_lines(visible.x0, visible.x1, spacing) {
            surface.fill_rect(Rect::new(x - half, visible.y0, x + half, visible.y1), color);
        }
        for y in grid_lines(visible.y0, visible.y1, spacing) {
            surface.fill_rect(Rect::new(visible.x0, y - half, visible.x1, y + half), color);
        }
    }

    /// Fills and outlines a section, then labels it.
    ///
    /// The name is centered horizontally just above the section's top edge,
    /// outside the section, so its stacks never cover it.
    fn draw_section<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        section: &Section,
        selected: bool,
        options: DisplayOptions,
        px: f64,
    ) {
        let rect = section.rect();
        let base = self.theme.section_color(section.color.as_deref());
        surface.fill_rect(rect, base.with_alpha(self.theme.section_fill_alpha));
        let border = if selected {
            self.theme.section_selected_border_px
        } else {
            self.theme.section_border_px
        };
        surface.stroke_rect(rect, base, border * px);

        if options.show_labels {
            let size = self.theme.section_label_size;
            let anchor = Point::new(rect.center().x, rect.y0 - size * 0.75);
            surface.fill_text(
                &section.name,
                anchor,
                &TextStyle::new(size, self.theme.label).bold(),
            );
        }
    }

    fn draw_stack<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        frame: &RenderFrame<'_>,
        stack: &Stack,
        px: f64,
    ) {
        let theme = &self.theme;
        let rect = stack.rect();
        let status = self
            .occupancy
            .status(frame.yard.layout, stack, frame.client_filter);

        surface.fill_rect(rect, theme.tint_color(status.tint));

        if frame.options.show_occupancy && status.rate > 0.0 {
            let filled = rect.height() * status.rate.min(1.0);
            surface.fill_rect(
                Rect::new(rect.x0, rect.y1 - filled, rect.x1, rect.y1),
                theme.occupancy_overlay,
            );
        }

        if frame.selected_stack == Some(stack.id.as_str()) {
            surface.stroke_rect(
                rect,
                theme.selected_stack_border,
                theme.selected_stack_border_px * px,
            );
        } else {
            surface.stroke_rect(rect, theme.stack_border, theme.stack_border_px * px);
        }

        if frame.options.show_labels {
            let center = rect.center();
            let number = TextStyle::new(theme.stack_label_size, theme.label).bold();
            let detail = TextStyle::new(theme.detail_label_size, theme.label);
            surface.fill_text(
                &format!("{}", stack.stack_number),
                Point::new(center.x, center.y - theme.stack_label_size * 0.6),
                &number,
            );
            surface.fill_text(
                &format!("{}/{}", status.occupancy, status.capacity),
                Point::new(center.x, center.y + theme.detail_label_size * 0.9),
                &detail,
            );
            if let StackTint::Special(kind) = status.tint {
                surface.fill_text(
                    kind.tag(),
                    Point::new(center.x, rect.y0 + theme.detail_label_size),
                    &detail,
                );
            }
        }
    }

    fn draw_containers<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        stack: &Stack,
        client_filter: Option<&str>,
    ) {
        let theme = &self.theme;
        for slot in stack.container_positions.iter().filter(|p| p.is_occupied) {
            let client = slot.client_code.as_deref();
            let mut color = theme.clients.color_for(client);
            if client_filter.is_some_and(|f| client != Some(f)) {
                color = color.multiply_alpha(theme.dimmed_alpha);
            }
            let width = theme.containers.width(slot.container_size);
            let rect = Rect::from_center_size(
                slot.position.to_point(),
                (width, theme.containers.depth),
            );
            surface.fill_rect(rect, color);
        }
    }
}

/// World positions of the grid lines covering `[lo, hi]`.
///
/// Lines are counted by index so that no position is accumulated. Far from
/// the origin, where adjacent indices collapse to the same float, the axis
/// gets no lines.
fn grid_lines(lo: f64, hi: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let first = (lo / spacing).floor();
    let last = (hi / spacing).floor();
    let count = if first + 1.0 == first || !(last >= first) {
        0
    } else {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "span checked against MAX_GRID_LINES"
        )]
        let steps = (last - first) as u32;
        steps.saturating_add(1)
    };
    (0..count).map(move |i| (first + f64::from(i)) * spacing)
}
