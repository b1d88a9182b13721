//! Color value parsing for page styles.
//!
//! Computed styles arrive as strings in whatever form the page authored or
//! the host resolved them to: `rgb()` / `rgba()` functions, 3- or 6-digit
//! hex, the `transparent` keyword, or nothing at all. The parser here is
//! deliberately tolerant: theming is a cosmetic overlay, and a value we
//! cannot read must never become a failure the page can observe.
//!
//! - [`Color::parse`] accepts `rgb()`, `rgba()`, hex, and `transparent`.
//! - [`Color::parse_lossy`] falls back to a fixed neutral gray on bad input.
//! - [`is_unstyled`] classifies values that should not be treated as an
//!   author's deliberate color choice (empty, `transparent`, zero alpha,
//!   `initial`/`inherit`/`unset`).

use std::fmt;

/// An RGB color with an alpha channel.
///
/// This is the engine's own color type, decoupled from any rendering or
/// styling crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
    /// Alpha channel (0.0–1.0).
    pub alpha: f64,
}

impl Color {
    /// Neutral fallback used when a color value cannot be parsed.
    pub const NEUTRAL: Color = Color {
        r: 128,
        g: 128,
        b: 128,
        alpha: 1.0,
    };

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        alpha: 0.0,
    };

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, alpha: 1.0 }
    }

    /// Creates a color with an explicit alpha, clamped to 0.0–1.0.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Color {
            r,
            g,
            b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Parses a CSS color value.
    ///
    /// Supports `rgb()` and `rgba()` (comma- or space-separated, with an
    /// optional `/ alpha`), `#rgb` / `#rrggbb` hex, and `transparent`.
    pub fn parse(value: &str) -> Result<Self, String> {
        let value = value.trim();
        if value.is_empty() {
            return Err("empty color value".to_string());
        }

        if value.eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = value.to_ascii_lowercase();
        if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
            return Self::parse_function(value);
        }

        Err(format!("unrecognized color value: '{}'", value))
    }

    /// Parses a color value, defaulting to [`Color::NEUTRAL`] on failure.
    pub fn parse_lossy(value: &str) -> Self {
        Self::parse(value).unwrap_or(Color::NEUTRAL)
    }

    /// Whether this color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.alpha == 0.0
    }

    /// Formats this color as a CSS `rgb()` / `rgba()` value.
    pub fn to_css(&self) -> String {
        if self.alpha >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?
                    * 17;
                let g = u8::from_str_radix(&hex[1..2], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?
                    * 17;
                let b = u8::from_str_radix(&hex[2..3], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?
                    * 17;
                Ok(Color::rgb(r, g, b))
            }
            // 6-digit hex: #rrggbb
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?;
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(format!(
                "invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Parses an `rgb(...)` / `rgba(...)` function value.
    fn parse_function(value: &str) -> Result<Self, String> {
        let open = value
            .find('(')
            .ok_or_else(|| format!("malformed color function: '{}'", value))?;
        let inner = value[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| format!("missing ')' in color function: '{}'", value))?;

        // Accept both legacy "r, g, b" and modern "r g b / a" notation.
        let parts: Vec<String> = if inner.contains(',') {
            inner.split(',').map(|p| p.trim().to_string()).collect()
        } else {
            inner
                .replace('/', " ")
                .split_whitespace()
                .map(str::to_string)
                .collect()
        };

        if parts.len() != 3 && parts.len() != 4 {
            return Err(format!(
                "color function needs 3 or 4 components, got {}",
                parts.len()
            ));
        }

        let channel = |part: &str| -> Result<u8, String> {
            let n: f64 = part
                .parse()
                .map_err(|_| format!("invalid color channel: '{}'", part))?;
            Ok(n.clamp(0.0, 255.0).round() as u8)
        };

        let r = channel(&parts[0])?;
        let g = channel(&parts[1])?;
        let b = channel(&parts[2])?;
        let alpha = if parts.len() == 4 {
            parts[3]
                .parse::<f64>()
                .map_err(|_| format!("invalid alpha value: '{}'", parts[3]))?
                .clamp(0.0, 1.0)
        } else {
            1.0
        };

        Ok(Color { r, g, b, alpha })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Whether a style value should be treated as "no deliberate color here".
///
/// Unstyled values are overridden freely by the fallback path; a styled
/// value is an author choice that gets adapted instead of flattened.
pub fn is_unstyled(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }
    if value.eq_ignore_ascii_case("transparent")
        || value.eq_ignore_ascii_case("initial")
        || value.eq_ignore_ascii_case("inherit")
        || value.eq_ignore_ascii_case("unset")
    {
        return true;
    }
    match Color::parse(value) {
        Ok(color) => color.is_transparent(),
        // An unparseable value ("blue", gradients) is still an author choice.
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =====================================================================
    // rgb()/rgba() parsing
    // =====================================================================

    #[test]
    fn parses_rgb_function() {
        assert_eq!(Color::parse("rgb(26, 26, 26)").unwrap(), Color::rgb(26, 26, 26));
        assert_eq!(Color::parse("rgb(0,0,0)").unwrap(), Color::rgb(0, 0, 0));
    }

    #[test]
    fn parses_rgba_function() {
        let c = Color::parse("rgba(255, 255, 255, 0.5)").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 255, 255));
        assert!((c.alpha - 0.5).abs() < 1e-9);
    }

    #[test]
    fn parses_space_separated_notation() {
        assert_eq!(Color::parse("rgb(26 26 26)").unwrap(), Color::rgb(26, 26, 26));
        let c = Color::parse("rgb(26 26 26 / 0.25)").unwrap();
        assert!((c.alpha - 0.25).abs() < 1e-9);
    }

    #[test]
    fn clamps_out_of_range_channels() {
        assert_eq!(Color::parse("rgb(300, -5, 26)").unwrap(), Color::rgb(255, 0, 26));
        let c = Color::parse("rgba(0, 0, 0, 7)").unwrap();
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn rejects_malformed_functions() {
        assert!(Color::parse("rgb(26, 26)").is_err());
        assert!(Color::parse("rgb(26, 26, 26, 1, 1)").is_err());
        assert!(Color::parse("rgb(a, b, c)").is_err());
        assert!(Color::parse("rgb(26, 26, 26").is_err());
    }

    // =====================================================================
    // Hex parsing
    // =====================================================================

    #[test]
    fn parses_hex_6_digit() {
        assert_eq!(Color::parse("#1a1a1a").unwrap(), Color::rgb(26, 26, 26));
        assert_eq!(Color::parse("#ffffff").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn parses_hex_3_digit() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse("#f80").unwrap(), Color::rgb(255, 136, 0));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(Color::parse("#ff").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("#ffff").is_err());
    }

    // =====================================================================
    // Keywords and degenerate inputs
    // =====================================================================

    #[test]
    fn parses_transparent_keyword() {
        let c = Color::parse("transparent").unwrap();
        assert!(c.is_transparent());
        assert_eq!(Color::parse("Transparent").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn rejects_empty_and_unknown() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("   ").is_err());
        assert!(Color::parse("cornflowerblue").is_err());
    }

    #[test]
    fn lossy_parse_defaults_to_neutral() {
        assert_eq!(Color::parse_lossy("not a color"), Color::NEUTRAL);
        assert_eq!(Color::parse_lossy(""), Color::NEUTRAL);
        assert_eq!(Color::parse_lossy("#1a1a1a"), Color::rgb(26, 26, 26));
    }

    // =====================================================================
    // Formatting
    // =====================================================================

    #[test]
    fn formats_opaque_as_rgb() {
        assert_eq!(Color::rgb(26, 26, 26).to_css(), "rgb(26, 26, 26)");
    }

    #[test]
    fn formats_translucent_as_rgba() {
        assert_eq!(Color::rgba(0, 0, 0, 0.5).to_css(), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn css_output_parses_back() {
        let original = Color::rgb(200, 100, 50);
        assert_eq!(Color::parse(&original.to_css()).unwrap(), original);
    }

    // =====================================================================
    // is_unstyled
    // =====================================================================

    #[test]
    fn unstyled_values() {
        assert!(is_unstyled(""));
        assert!(is_unstyled("   "));
        assert!(is_unstyled("transparent"));
        assert!(is_unstyled("rgba(0, 0, 0, 0)"));
        assert!(is_unstyled("initial"));
        assert!(is_unstyled("inherit"));
        assert!(is_unstyled("unset"));
    }

    #[test]
    fn styled_values() {
        assert!(!is_unstyled("rgb(255, 255, 255)"));
        assert!(!is_unstyled("#fff"));
        assert!(!is_unstyled("rgba(0, 0, 0, 0.01)"));
        // Unparseable values are author choices, not gaps.
        assert!(!is_unstyled("blue"));
        assert!(!is_unstyled("linear-gradient(red, blue)"));
    }

    // =====================================================================
    // Robustness
    // =====================================================================

    proptest! {
        #[test]
        fn parse_lossy_never_panics(s in "\\PC*") {
            let _ = Color::parse_lossy(&s);
        }

        #[test]
        fn is_unstyled_never_panics(s in "\\PC*") {
            let _ = is_unstyled(&s);
        }
    }
}
