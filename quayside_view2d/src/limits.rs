// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive zoom range enforced by [`crate::ViewportTransform`].
///
/// Every zoom mutation clamps into this range, so a transform can never reach
/// a zero or negative scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Default minimum zoom.
    pub const DEFAULT_MIN: f64 = 0.1;
    /// Default maximum zoom.
    pub const DEFAULT_MAX: f64 = 5.0;

    /// Creates limits from two bounds, normalizing their order.
    ///
    /// Non-finite or non-positive bounds fall back to the defaults.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        let (a, b) = if valid(a) && valid(b) {
            (a, b)
        } else {
            (Self::DEFAULT_MIN, Self::DEFAULT_MAX)
        };
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Smallest allowed zoom.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed zoom.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into the range.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLimits;

    #[test]
    fn new_normalizes_and_rejects_bad_bounds() {
        let l = ZoomLimits::new(4.0, 0.5);
        assert_eq!((l.min(), l.max()), (0.5, 4.0));

        let l = ZoomLimits::new(0.0, 2.0);
        assert_eq!(l, ZoomLimits::default());
        let l = ZoomLimits::new(f64::NAN, 2.0);
        assert_eq!(l, ZoomLimits::default());
    }
}
