// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

use crate::{DrawSurface, SurfaceOp, TextStyle};

/// A draw operation together with the transform it was drawn under.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDraw {
    /// The operation.
    pub op: SurfaceOp,
    /// Transform in effect when the operation was applied.
    pub transform: Affine,
}

/// A [`DrawSurface`] that records operations instead of drawing them.
///
/// This backend:
/// - Appends every operation, including transform changes, to [`Self::ops`],
/// - Tracks the current transform,
/// - Keeps a [`RecordedDraw`] log of draws with the transform in effect,
///   which is what tests about "where did this end up" want.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    transform: Affine,
    ops: Vec<SurfaceOp>,
    draws: Vec<RecordedDraw>,
}

impl RecordingSurface {
    /// Creates an empty recording for a surface of the given device size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            transform: Affine::IDENTITY,
            ops: Vec::new(),
            draws: Vec::new(),
        }
    }

    /// Every operation in the order it was applied.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Draw operations (fills, strokes, text, clears) with their transforms.
    #[must_use]
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    /// Text of every [`SurfaceOp::FillText`] in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Forgets all recorded operations and resets the transform.
    pub fn reset(&mut self) {
        self.ops.clear();
        self.draws.clear();
        self.transform = Affine::IDENTITY;
    }

    fn record_draw(&mut self, op: SurfaceOp) {
        self.ops.push(op.clone());
        self.draws.push(RecordedDraw {
            op,
            transform: self.transform,
        });
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.record_draw(SurfaceOp::Clear(color));
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.ops.push(SurfaceOp::SetTransform(transform));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record_draw(SurfaceOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.record_draw(SurfaceOp::StrokeRect { rect, color, width });
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.record_draw(SurfaceOp::FillText {
            text: text.to_string(),
            anchor,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size};
    use peniko::Color;

    use super::RecordingSurface;
    use crate::{DrawSurface, SurfaceOp, TextStyle, replay};

    #[test]
    fn draws_capture_transform_in_effect() {
        let mut s = RecordingSurface::new(Size::new(10.0, 10.0));
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        s.set_transform(Affine::translate((3.0, 4.0)));
        s.stroke_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE, 0.5);
        s.fill_text("7", Point::new(0.5, 0.5), &TextStyle::new(1.0, Color::BLACK));

        assert_eq!(s.ops().len(), 4);
        assert_eq!(s.draws().len(), 3);
        assert_eq!(s.draws()[0].transform, Affine::IDENTITY);
        assert_eq!(s.draws()[1].transform, Affine::translate((3.0, 4.0)));
        assert_eq!(s.texts().collect::<alloc::vec::Vec<_>>(), ["7"]);
    }

    #[test]
    fn replay_reproduces_ops() {
        let mut a = RecordingSurface::new(Size::new(10.0, 10.0));
        a.clear(Color::WHITE);
        a.set_transform(Affine::scale(2.0));
        a.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0), Color::BLACK);

        let mut b = RecordingSurface::new(Size::new(10.0, 10.0));
        replay(&mut b, a.ops());
        assert_eq!(a.ops(), b.ops());
        assert!(matches!(b.ops()[0], SurfaceOp::Clear(_)));

        b.reset();
        assert!(b.ops().is_empty());
        assert_eq!(b.transform(), Affine::IDENTITY);
    }
}
