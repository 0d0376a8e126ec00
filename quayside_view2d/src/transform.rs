// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::limits::ZoomLimits;

/// Zoom, pan, and rotation of a yard view.
///
/// World space is the yard's coordinate system in meters; screen space is the
/// pixel space of a drawing surface of size `canvas`. The canvas size is an
/// argument to every conversion rather than state, since the surface is owned
/// and resized by the caller.
///
/// The world→screen mapping is composed as a drawing context would apply it:
/// translate to the canvas center, scale by `zoom`, rotate by `rotation`,
/// translate by `pan`, then translate by `-world_center`. A point at
/// `world_center - pan` therefore lands on the canvas center.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    zoom: f64,
    pan: Vec2,
    rotation: f64,
    world_center: Point,
    limits: ZoomLimits,
}

impl ViewportTransform {
    /// Creates a transform with zoom `1.0`, no pan, no rotation, and the world
    /// origin at the canvas center.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(ZoomLimits::default())
    }

    /// Creates an identity-like transform with custom zoom limits.
    #[must_use]
    pub fn with_limits(limits: ZoomLimits) -> Self {
        Self {
            zoom: limits.clamp(1.0),
            pan: Vec2::ZERO,
            rotation: 0.0,
            world_center: Point::ORIGIN,
            limits,
        }
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in world units.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the current rotation in radians, normalized to `[0, 2π)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns the world point anchored at the canvas center when pan is zero.
    #[must_use]
    pub fn world_center(&self) -> Point {
        self.world_center
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Sets the zoom factor, clamped into the zoom limits.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = self.limits.clamp(zoom);
    }

    /// Multiplies the zoom by `factor`, clamped into the zoom limits.
    ///
    /// Zoom is always about the canvas center. Non-positive and non-finite
    /// factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.set_zoom(self.zoom * factor);
    }

    /// Pans by a delta in screen pixels.
    ///
    /// The delta is divided by zoom and accumulated in world units. Rotation is
    /// not undone first, so a drag always follows the raw screen direction.
    pub fn pan_by(&mut self, delta_screen: Vec2) {
        if !delta_screen.is_finite() || delta_screen == Vec2::ZERO {
            return;
        }
        self.pan += delta_screen / self.zoom;
    }

    /// Sets the rotation in radians. Non-finite values are ignored.
    pub fn set_rotation(&mut self, radians: f64) {
        if !radians.is_finite() {
            return;
        }
        let mut r = radians % TAU;
        if r < 0.0 {
            r += TAU;
        }
        // `-ε + TAU` can round up to exactly `TAU`.
        if r >= TAU {
            r = 0.0;
        }
        self.rotation = r;
    }

    /// Adds `radians` to the rotation.
    pub fn rotate_by(&mut self, radians: f64) {
        self.set_rotation(self.rotation + radians);
    }

    /// Sets the world point anchored at the canvas center.
    pub fn set_world_center(&mut self, center: Point) {
        if center.is_finite() {
            self.world_center = center;
        }
    }

    /// Resets zoom to `1.0` and clears pan and rotation.
    ///
    /// The world center is kept, so a fitted yard stays centered.
    pub fn reset(&mut self) {
        self.zoom = self.limits.clamp(1.0);
        self.pan = Vec2::ZERO;
        self.rotation = 0.0;
    }

    /// Fits `world_bounds` into `canvas`, preserving aspect ratio.
    ///
    /// Zoom becomes the smaller of the two axis ratios and `max_zoom`, clamped
    /// into the zoom limits. Pan is reset and the bounds center becomes the
    /// world center. Empty bounds or an empty canvas leave the transform as it
    /// was.
    pub fn fit_to_bounds(&mut self, world_bounds: Rect, canvas: Size, max_zoom: f64) {
        if !(world_bounds.width() > 0.0 && world_bounds.height() > 0.0) {
            return;
        }
        if !(canvas.width > 0.0 && canvas.height > 0.0) {
            return;
        }
        let sx = canvas.width / world_bounds.width();
        let sy = canvas.height / world_bounds.height();
        let mut zoom = sx.min(sy);
        if max_zoom.is_finite() && max_zoom > 0.0 {
            zoom = zoom.min(max_zoom);
        }
        self.zoom = self.limits.clamp(zoom);
        self.pan = Vec2::ZERO;
        self.world_center = world_bounds.center();
    }

    /// The composed world→screen transform for a canvas of size `canvas`.
    #[must_use]
    pub fn affine(&self, canvas: Size) -> Affine {
        let canvas_center = Vec2::new(canvas.width * 0.5, canvas.height * 0.5);
        Affine::translate(canvas_center)
            * Affine::scale(self.zoom)
            * Affine::rotate(self.rotation)
            * Affine::translate(self.pan - self.world_center.to_vec2())
    }

    /// The screen→world transform, the exact inverse of [`Self::affine`].
    #[must_use]
    pub fn inverse_affine(&self, canvas: Size) -> Affine {
        let canvas_center = Vec2::new(canvas.width * 0.5, canvas.height * 0.5);
        Affine::translate(self.world_center.to_vec2() - self.pan)
            * Affine::rotate(-self.rotation)
            * Affine::scale(1.0 / self.zoom)
            * Affine::translate(-canvas_center)
    }

    /// Converts a world-space point into screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point, canvas: Size) -> Point {
        self.affine(canvas) * pt
    }

    /// Converts a screen pixel position into world space.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point, canvas: Size) -> Point {
        self.inverse_affine(canvas) * pt
    }

    /// Screen-space bounding box of a world rectangle.
    ///
    /// Under rotation this is larger than the rectangle itself.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect, canvas: Size) -> Rect {
        transformed_bounds(self.affine(canvas), rect)
    }

    /// World-space bounding box of everything visible on the canvas.
    ///
    /// Under rotation this includes some world area outside the canvas.
    #[must_use]
    pub fn visible_world_rect(&self, canvas: Size) -> Rect {
        transformed_bounds(self.inverse_affine(canvas), canvas.to_rect())
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, canvas: Size) -> ViewportDebugInfo {
        ViewportDebugInfo {
            canvas,
            zoom: self.zoom,
            pan: self.pan,
            rotation: self.rotation,
            world_center: self.world_center,
            visible_world_rect: self.visible_world_rect(canvas),
            min_zoom: self.limits.min(),
            max_zoom: self.limits.max(),
        }
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new()
    }
}

fn transformed_bounds(affine: Affine, rect: Rect) -> Rect {
    // Transform the four corners and take their bounding box.
    let q0 = affine * Point::new(rect.x0, rect.y0);
    let q1 = affine * Point::new(rect.x1, rect.y0);
    let q2 = affine * Point::new(rect.x0, rect.y1);
    let q3 = affine * Point::new(rect.x1, rect.y1);
    let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
    let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
    let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
    let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}

/// Debug snapshot of a [`ViewportTransform`] for a given canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Canvas size used for the snapshot.
    pub canvas: Size,
    /// Current zoom factor.
    pub zoom: f64,
    /// Current pan offset in world units.
    pub pan: Vec2,
    /// Current rotation in radians.
    pub rotation: f64,
    /// World point anchored at the canvas center.
    pub world_center: Point,
    /// World bounding box of the visible canvas.
    pub visible_world_rect: Rect,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}
