// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and sizes used by the renderer.
//!
//! Nothing here is global: a [`Theme`] is handed to the
//! [`Renderer`](crate::Renderer) at construction and can be swapped for a
//! dark mode or a customer's brand palette.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use quayside_yard::{ContainerSize, OccupancyLevel, SpecialStack, StackTint};

/// Ordered table of client code → container color.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientPalette {
    entries: Vec<(String, Color)>,
    fallback: Color,
}

impl ClientPalette {
    /// Creates an empty palette; every client gets `fallback`.
    #[must_use]
    pub const fn new(fallback: Color) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Adds or replaces the color for `client`.
    #[must_use]
    pub fn with(mut self, client: impl Into<String>, color: Color) -> Self {
        let client = client.into();
        match self.entries.iter_mut().find(|(c, _)| *c == client) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((client, color)),
        }
        self
    }

    /// Color for `client`, or the fallback for unknown or missing clients.
    #[must_use]
    pub fn color_for(&self, client: Option<&str>) -> Color {
        client
            .and_then(|code| self.entries.iter().find(|(c, _)| c == code))
            .map_or(self.fallback, |(_, color)| *color)
    }

    /// Color used for clients without an entry.
    #[must_use]
    pub fn fallback(&self) -> Color {
        self.fallback
    }
}

impl Default for ClientPalette {
    fn default() -> Self {
        Self::new(Color::from_rgb8(0x9c, 0xa3, 0xaf))
            .with("MAEU", Color::from_rgb8(0x42, 0xa5, 0xd6))
            .with("MSCU", Color::from_rgb8(0xf5, 0xc2, 0x1b))
            .with("CMAU", Color::from_rgb8(0x1d, 0x3f, 0x8a))
            .with("HLCU", Color::from_rgb8(0xf9, 0x73, 0x16))
            .with("ONEY", Color::from_rgb8(0xdb, 0x27, 0x77))
            .with("EGLV", Color::from_rgb8(0x16, 0xa3, 0x4a))
    }
}

/// Container footprints in world units (meters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerFootprint {
    /// Drawn width of a 20 ft container.
    pub feet20: f64,
    /// Drawn width of a 40 ft container.
    pub feet40: f64,
    /// Drawn width of a 45 ft container.
    pub feet45: f64,
    /// Drawn height of every container.
    pub depth: f64,
}

impl ContainerFootprint {
    /// Drawn width for a size class.
    #[must_use]
    pub fn width(&self, size: ContainerSize) -> f64 {
        match size {
            ContainerSize::Feet20 => self.feet20,
            ContainerSize::Feet40 => self.feet40,
            ContainerSize::Feet45 => self.feet45,
        }
    }
}

impl Default for ContainerFootprint {
    fn default() -> Self {
        Self {
            feet20: 6.06,
            feet40: 12.19,
            feet45: 13.72,
            depth: 2.44,
        }
    }
}

/// Everything the renderer needs to pick a color or a size.
///
/// Stroke widths are in screen pixels and stay constant while zooming; label
/// sizes and grid spacing are in world units and scale with the view.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Surface clear color.
    pub background: Color,
    /// Grid line color.
    pub grid: Color,
    /// Grid spacing in world units.
    pub grid_spacing: f64,
    /// Grid line width in screen pixels.
    pub grid_line_px: f64,
    /// Section color when the model has none or it does not parse.
    pub section_fallback: Color,
    /// Alpha applied to the section color for its fill.
    pub section_fill_alpha: f32,
    /// Section border width in screen pixels.
    pub section_border_px: f64,
    /// Selected section border width in screen pixels.
    pub section_selected_border_px: f64,
    /// Section name size in world units.
    pub section_label_size: f64,
    /// Stack fill for [`OccupancyLevel::Empty`].
    pub empty: Color,
    /// Stack fill for [`OccupancyLevel::Low`].
    pub low: Color,
    /// Stack fill for [`OccupancyLevel::Medium`].
    pub medium: Color,
    /// Stack fill for [`OccupancyLevel::High`].
    pub high: Color,
    /// Stack fill for [`SpecialStack::Entry`].
    pub entry: Color,
    /// Stack fill for [`SpecialStack::End`].
    pub end: Color,
    /// Stack fill for [`SpecialStack::HighCapacity`].
    pub high_capacity: Color,
    /// Stack fill for [`SpecialStack::Special`].
    pub special: Color,
    /// Translucent fill rising from a stack's bottom edge with its rate.
    pub occupancy_overlay: Color,
    /// Stack border.
    pub stack_border: Color,
    /// Stack border width in screen pixels.
    pub stack_border_px: f64,
    /// Selected stack border.
    pub selected_stack_border: Color,
    /// Selected stack border width in screen pixels.
    pub selected_stack_border_px: f64,
    /// Label text color.
    pub label: Color,
    /// Stack number size in world units.
    pub stack_label_size: f64,
    /// Occupancy and tag size in world units.
    pub detail_label_size: f64,
    /// Container colors by client.
    pub clients: ClientPalette,
    /// Container footprints.
    pub containers: ContainerFootprint,
    /// Alpha multiplier for containers outside the active client filter.
    pub dimmed_alpha: f32,
}

impl Theme {
    /// Fill color for a resolved stack tint.
    #[must_use]
    pub fn tint_color(&self, tint: StackTint) -> Color {
        match tint {
            StackTint::Occupancy(OccupancyLevel::Empty) => self.empty,
            StackTint::Occupancy(OccupancyLevel::Low) => self.low,
            StackTint::Occupancy(OccupancyLevel::Medium) => self.medium,
            StackTint::Occupancy(OccupancyLevel::High) => self.high,
            StackTint::Special(SpecialStack::Entry) => self.entry,
            StackTint::Special(SpecialStack::End) => self.end,
            StackTint::Special(SpecialStack::HighCapacity) => self.high_capacity,
            StackTint::Special(SpecialStack::Special) => self.special,
        }
    }

    /// Opaque base color of a section, parsed from its CSS color string.
    #[must_use]
    pub fn section_color(&self, css: Option<&str>) -> Color {
        css.and_then(|s| parse_color(s).ok())
            .map_or(self.section_fallback, |c| c.to_alpha_color::<Srgb>())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xf8, 0xfa, 0xfc),
            grid: Color::from_rgba8(0x94, 0xa3, 0xb8, 0x40),
            grid_spacing: 20.0,
            grid_line_px: 1.0,
            section_fallback: Color::from_rgb8(0x64, 0x74, 0x8b),
            section_fill_alpha: 0.12,
            section_border_px: 1.0,
            section_selected_border_px: 3.0,
            section_label_size: 4.0,
            empty: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            low: Color::from_rgb8(0x22, 0xc5, 0x5e),
            medium: Color::from_rgb8(0xf5, 0x9e, 0x0b),
            high: Color::from_rgb8(0xef, 0x44, 0x44),
            entry: Color::from_rgb8(0x10, 0xb9, 0x81),
            end: Color::from_rgb8(0x63, 0x66, 0xf1),
            high_capacity: Color::from_rgb8(0x8b, 0x5c, 0xf6),
            special: Color::from_rgb8(0xec, 0x48, 0x99),
            occupancy_overlay: Color::from_rgba8(0x0f, 0x17, 0x2a, 0x40),
            stack_border: Color::from_rgb8(0x33, 0x41, 0x55),
            stack_border_px: 1.0,
            selected_stack_border: Color::from_rgb8(0x25, 0x63, 0xeb),
            selected_stack_border_px: 3.0,
            label: Color::from_rgb8(0x0f, 0x17, 0x2a),
            stack_label_size: 2.4,
            detail_label_size: 1.6,
            clients: ClientPalette::default(),
            containers: ContainerFootprint::default(),
            dimmed_alpha: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;
    use quayside_yard::{ContainerSize, OccupancyLevel, SpecialStack, StackTint};

    use super::{ClientPalette, ContainerFootprint, Theme};

    #[test]
    fn palette_falls_back_for_unknown_and_missing_clients() {
        let palette = ClientPalette::new(Color::BLACK).with("MAEU", Color::WHITE);
        assert_eq!(palette.color_for(Some("MAEU")), Color::WHITE);
        assert_eq!(palette.color_for(Some("ZZZU")), Color::BLACK);
        assert_eq!(palette.color_for(None), Color::BLACK);

        let replaced = palette.with("MAEU", Color::TRANSPARENT);
        assert_eq!(replaced.color_for(Some("MAEU")), Color::TRANSPARENT);
    }

    #[test]
    fn tint_colors_are_distinct_for_special_and_high() {
        let theme = Theme::default();
        assert_ne!(
            theme.tint_color(StackTint::Special(SpecialStack::Entry)),
            theme.tint_color(StackTint::Occupancy(OccupancyLevel::High))
        );
    }

    #[test]
    fn section_color_parses_css_or_falls_back() {
        let theme = Theme::default();
        let blue = theme.section_color(Some("#0000ff"));
        assert_eq!(blue.to_rgba8().b, 0xff);
        assert_eq!(blue.to_rgba8().r, 0);
        assert_eq!(theme.section_color(Some("not a color")), theme.section_fallback);
        assert_eq!(theme.section_color(None), theme.section_fallback);
    }

    #[test]
    fn footprints_grow_with_size_class() {
        let f = ContainerFootprint::default();
        assert!(f.width(ContainerSize::Feet20) < f.width(ContainerSize::Feet40));
        assert!(f.width(ContainerSize::Feet40) < f.width(ContainerSize::Feet45));
    }
}
