// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Imaging: the drawing capability a yard renderer paints into.
//!
//! The renderer only needs a handful of operations, so the surface is a small
//! trait rather than a full 2D API:
//!
//! - [`DrawSurface::clear`] the whole surface,
//! - [`DrawSurface::set_transform`] for the local→device mapping,
//! - [`DrawSurface::fill_rect`] and [`DrawSurface::stroke_rect`] for
//!   axis-aligned (in local space) rectangles,
//! - [`DrawSurface::fill_text`] for labels.
//!
//! Each operation also exists as plain data, [`SurfaceOp`], so a frame can be
//! recorded, compared, and replayed.
//!
//! Two backends ship with the crate:
//!
//! - [`RecordingSurface`] records every op together with the transform in
//!   effect. It does not rasterize; tests assert on the emitted ops.
//! - [`PixmapSurface`] rasterizes into RGBA8 pixels through `vello_cpu`.
//!   It does not draw text.
//!
//! GPU-backed or browser canvases implement [`DrawSurface`] in their own
//! crates; the geometry above this layer does not change.
//!
//! ```rust
//! use kurbo::{Affine, Rect};
//! use peniko::Color;
//! use quayside_imaging::{DrawSurface, RecordingSurface, SurfaceOp};
//!
//! let mut surface = RecordingSurface::new(kurbo::Size::new(64.0, 64.0));
//! surface.clear(Color::WHITE);
//! surface.set_transform(Affine::scale(2.0));
//! surface.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::BLACK);
//!
//! assert_eq!(surface.ops().len(), 3);
//! assert!(matches!(surface.ops()[2], SurfaceOp::FillRect { .. }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pixmap;
mod recording;

use alloc::string::String;

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

pub use pixmap::PixmapSurface;
pub use recording::{RecordedDraw, RecordingSurface};

/// Horizontal placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor is the start of the text.
    Start,
    /// Anchor is the horizontal center of the text.
    #[default]
    Center,
    /// Anchor is the end of the text.
    End,
}

/// Text appearance for [`DrawSurface::fill_text`].
///
/// The anchor's vertical position is the text's middle line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in local units.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Bold weight.
    pub bold: bool,
}

impl TextStyle {
    /// Centered, regular-weight text of the given size and color.
    #[must_use]
    pub const fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            align: TextAlign::Center,
            bold: false,
        }
    }

    /// Returns the style with bold weight.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One drawing operation as plain data.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Fill the whole surface, ignoring the transform.
    Clear(Color),
    /// Replace the current local→device transform.
    SetTransform(Affine),
    /// Fill a local-space rectangle.
    FillRect {
        /// Rectangle in local coordinates.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Stroke a local-space rectangle, centered on its edges.
    StrokeRect {
        /// Rectangle in local coordinates.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width in local units.
        width: f64,
    },
    /// Draw a line of text.
    FillText {
        /// The text.
        text: String,
        /// Anchor in local coordinates.
        anchor: Point,
        /// Appearance.
        style: TextStyle,
    },
}

/// A caller-owned 2D drawing target.
///
/// Geometry passed to the drawing methods is in local coordinates and is
/// mapped to device pixels by the current transform. [`Self::clear`] ignores
/// the transform. A fresh surface starts with the identity transform.
pub trait DrawSurface {
    /// Device size of the surface in pixels.
    fn size(&self) -> Size;

    /// Fills every pixel with `color`.
    fn clear(&mut self, color: Color);

    /// Replaces the current local→device transform.
    fn set_transform(&mut self, transform: Affine);

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes the outline of `rect`; the stroke is centered on the edges.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Draws `text` at `anchor`.
    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle);

    /// Applies a recorded operation.
    fn apply(&mut self, op: &SurfaceOp) {
        match op {
            SurfaceOp::Clear(color) => self.clear(*color),
            SurfaceOp::SetTransform(tx) => self.set_transform(*tx),
            SurfaceOp::FillRect { rect, color } => self.fill_rect(*rect, *color),
            SurfaceOp::StrokeRect { rect, color, width } => {
                self.stroke_rect(*rect, *color, *width);
            }
            SurfaceOp::FillText {
                text,
                anchor,
                style,
            } => self.fill_text(text, *anchor, style),
        }
    }
}

/// Replays `ops` onto `surface` in order.
pub fn replay<S: DrawSurface + ?Sized>(surface: &mut S, ops: &[SurfaceOp]) {
    for op in ops {
        surface.apply(op);
    }
}
