// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use vello_cpu::kurbo::{Affine as CpuAffine, Join as CpuJoin, Rect as CpuRect, Stroke};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

use crate::{DrawSurface, TextStyle};

/// A CPU raster surface backed by [`vello_cpu`].
///
/// Operations are encoded into a sparse-strips [`RenderContext`] and
/// rasterized lazily, the first time pixels are read after a change.
/// [`DrawSurface::clear`] drops everything encoded so far, so repeated draw
/// passes never accumulate. Pixels are read back as unpremultiplied RGBA8.
/// Text is ignored.
pub struct PixmapSurface {
    ctx: RenderContext,
    width: u16,
    height: u16,
    transform: Affine,
    drawable: bool,
    data: Vec<u8>,
    stale: bool,
}

impl fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("transform", &self.transform)
            .field("stale", &self.stale)
            .finish_non_exhaustive()
    }
}

impl PixmapSurface {
    /// Creates a transparent pixmap.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let settings = RenderSettings {
            // The u8 pipeline keeps output stable whatever pipeline features
            // are enabled elsewhere in the build.
            render_mode: RenderMode::OptimizeSpeed,
            ..RenderSettings::default()
        };
        let mut ctx = RenderContext::new_with(width, height, settings);
        ctx.reset();
        Self {
            ctx,
            width,
            height,
            transform: Affine::IDENTITY,
            drawable: true,
            data: vec![0; usize::from(width) * usize::from(height) * 4],
            stale: false,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Row-major RGBA8 pixel data. Rasterizes pending operations first.
    pub fn data(&mut self) -> &[u8] {
        self.resolve();
        &self.data
    }

    /// The RGBA8 value at `(x, y)`, or `None` outside the pixmap.
    ///
    /// Rasterizes pending operations first.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= u32::from(self.width) || y >= u32::from(self.height) {
            return None;
        }
        self.resolve();
        let i = (y as usize * usize::from(self.width) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    fn resolve(&mut self) {
        if !self.stale {
            return;
        }
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        self.data.clear();
        for p in pixmap.take_unpremultiplied() {
            self.data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        self.stale = false;
    }

    fn device_rect(&self) -> CpuRect {
        CpuRect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

fn affine_to_cpu(xf: Affine) -> CpuAffine {
    CpuAffine::new(xf.as_coeffs())
}

fn rect_to_cpu(rect: Rect) -> CpuRect {
    let rect = rect.abs();
    CpuRect::new(rect.x0, rect.y0, rect.x1, rect.y1)
}

impl DrawSurface for PixmapSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    fn clear(&mut self, color: Color) {
        self.ctx.reset();
        self.ctx.set_transform(CpuAffine::IDENTITY);
        self.ctx.set_paint(color);
        let full = self.device_rect();
        self.ctx.fill_rect(&full);
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.stale = true;
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        // A singular transform collapses every shape; skip drawing entirely.
        self.drawable = transform.determinant().abs() > f64::EPSILON;
        self.ctx.set_transform(affine_to_cpu(transform));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if !self.drawable || !(rect.width() != 0.0 && rect.height() != 0.0) {
            return;
        }
        self.ctx.set_paint(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
        self.stale = true;
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        if !self.drawable || !(width > 0.0) {
            return;
        }
        let mut stroke = Stroke::new(width);
        stroke.join = CpuJoin::Miter;
        self.ctx.set_stroke(stroke);
        self.ctx.set_paint(color);
        self.ctx.stroke_rect(&rect_to_cpu(rect));
        self.stale = true;
    }

    fn fill_text(&mut self, _text: &str, _anchor: Point, _style: &TextStyle) {}
}
