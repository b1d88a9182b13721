//! RGB ↔ HSL conversion and brightness scaling.
//!
//! Brightness adjustments happen in HSL rather than by scaling RGB channels
//! directly: scaling lightness preserves the hue and saturation of an
//! author's color, so a darkened button still reads as "the same blue",
//! only dimmer. The conversions follow the CSS Color Module definitions.
//!
//! # Example
//!
//! ```rust
//! use umbra_engine::colorspace::{adjust_brightness, rgb_to_hsl};
//! use umbra_engine::Color;
//!
//! let gray = Color::rgb(128, 128, 128);
//! let hsl = rgb_to_hsl(gray);
//! assert!((hsl.l - 0.5).abs() < 0.01);
//!
//! // Darken by 60%: lightness scales down, hue is preserved.
//! let dimmed = adjust_brightness(gray, -60.0);
//! assert!(dimmed.r < gray.r);
//! ```

use crate::color::Color;

/// A color in HSL space.
///
/// Hue is in degrees (0–360), saturation and lightness are fractions
/// (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation fraction.
    pub s: f64,
    /// Lightness fraction.
    pub l: f64,
}

/// Converts an RGB color to HSL. The alpha channel is dropped.
pub fn rgb_to_hsl(color: Color) -> Hsl {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let d = max - min;
    if d.abs() < f64::EPSILON {
        // Achromatic: hue is undefined, zero by convention.
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / d).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
}

/// Converts an HSL color back to opaque RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_channel(l);
        return Color::rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Color::rgb(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// Scales a color's lightness by a signed percentage.
///
/// `-60.0` leaves 40% of the original lightness; `+25.0` yields 125%.
/// The result is clamped to the valid range and keeps the input's alpha.
pub fn adjust_brightness(color: Color, percent: f64) -> Color {
    let mut hsl = rgb_to_hsl(color);
    hsl.l = (hsl.l * (1.0 + percent / 100.0)).clamp(0.0, 1.0);
    let mut adjusted = hsl_to_rgb(hsl);
    adjusted.alpha = color.alpha;
    adjusted
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
