//! OS color-scheme preference.
//!
//! When a site has no saved theme choice, a session configured with
//! [`SessionConfig::with_os_default`](crate::SessionConfig::with_os_default)
//! starts from the user's OS preference instead of leaving the page
//! untouched. Override the detector for testing:
//!
//! ```rust
//! use umbra::adaptive::{detect_color_mode, set_mode_detector};
//! use umbra::ColorMode;
//!
//! set_mode_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! ```

use once_cell::sync::Lazy;
use std::sync::Mutex;

use umbra_engine::ColorMode;

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine the user's preferred mode.
///
/// This is useful for testing or to force a specific mode. Tests that swap
/// the detector should run serially and restore their change.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the user's preferred color mode from the OS.
///
/// Uses the `dark-light` crate; anything other than an affirmative dark
/// answer (light, unspecified, detection failure) reads as light.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn detector_override_round_trip() {
        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
