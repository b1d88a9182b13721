//! Per-page theme sessions.
//!
//! A [`Session`] is the explicit context object for one page load: the
//! site key, the page surface, the cached detection report, the startup
//! snapshot, and the persistence handle. There are no ambient globals;
//! everything a command needs lives here.
//!
//! Startup runs detection, captures the snapshot, then re-applies any
//! saved choice for the hostname. Commands then arrive one at a time via
//! [`Session::handle`]; each completes synchronously. The persistence
//! write is best-effort: a failure is logged and the visual state stands.

use std::sync::Arc;

use tracing::{debug, error, warn};

use umbra_engine::{detect, Activator, Page, Palette, PaletteError, StyleSnapshot, ThemeMode};
use umbra_store::{SiteKey, ThemeStore};

use crate::adaptive::detect_color_mode;
use crate::dispatch::{Ack, ThemeCommand};

/// Session construction options.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The palette used for variable overrides and fallback styling.
    pub palette: Palette,
    /// Start from the OS color-scheme preference when the site has no
    /// saved choice. Off by default: an untouched site stays untouched.
    pub os_default: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            os_default: false,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the palette, returning `self` for chaining.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Loads the palette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`PaletteError`] if the file cannot be read or parsed.
    pub fn with_palette_file<P: AsRef<std::path::Path>>(
        self,
        path: P,
    ) -> Result<Self, PaletteError> {
        Ok(self.with_palette(Palette::from_file(path)?))
    }

    /// Enables or disables the OS-preference default.
    pub fn with_os_default(mut self, enabled: bool) -> Self {
        self.os_default = enabled;
        self
    }
}

/// One theming session for one page load.
pub struct Session {
    site: SiteKey,
    page: Page,
    activator: Activator,
    store: Arc<dyn ThemeStore>,
}

impl Session {
    /// Starts a session: detect native support, capture the original
    /// state, then re-apply the site's saved choice if there is one.
    pub fn start(
        hostname: &str,
        page: Page,
        store: Arc<dyn ThemeStore>,
        config: SessionConfig,
    ) -> Self {
        let site = SiteKey::from_hostname(hostname);
        debug!(site = %site, "theme session starting");

        let report = detect(&page);
        let snapshot = StyleSnapshot::capture(&page);
        let activator = Activator::new(report, snapshot, config.palette);

        let mut session = Self {
            site,
            page,
            activator,
            store,
        };
        session.apply_saved(config.os_default);
        session
    }

    /// Handles one theme command and acknowledges it.
    ///
    /// Failure is only signaled if an unexpected error escapes every
    /// fallback branch, which the activator's design otherwise prevents.
    pub fn handle(&mut self, command: ThemeCommand) -> Ack {
        debug!(command = command.wire_name(), "handling theme command");
        match self.apply(command.mode()) {
            Ok(()) => Ack::ok(),
            Err(err) => {
                error!(error = %err, "theme command failed");
                Ack::failure(err.to_string())
            }
        }
    }

    /// The page surface, for hosts syncing state back to a live document.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable access to the page surface.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// The session's site key.
    pub fn site(&self) -> &SiteKey {
        &self.site
    }

    /// The session's activator (report, snapshot, palette).
    pub fn activator(&self) -> &Activator {
        &self.activator
    }

    fn apply(&mut self, mode: ThemeMode) -> anyhow::Result<()> {
        match mode.color_mode() {
            Some(color_mode) => {
                let via = self.activator.activate(&mut self.page, color_mode);
                debug!(mode = mode.as_str(), via = ?via, "theme applied");
            }
            None => {
                self.activator.reset(&mut self.page);
            }
        }
        self.persist(mode);
        Ok(())
    }

    /// Re-applies the saved choice for this site, if any. A saved `reset`
    /// and a missing record both leave the page untouched (unless the
    /// OS-preference default is enabled for the latter).
    fn apply_saved(&mut self, os_default: bool) {
        let saved = match self.store.load(&self.site) {
            Ok(saved) => saved,
            Err(err) => {
                warn!(site = %self.site, error = %err, "failed to read saved theme");
                None
            }
        };

        match saved {
            Some(mode) => {
                debug!(site = %self.site, mode = %mode, "restoring saved theme");
                if let Some(color_mode) = mode.color_mode() {
                    self.activator.activate(&mut self.page, color_mode);
                }
            }
            None if os_default => {
                let color_mode = detect_color_mode();
                debug!(?color_mode, "no saved theme, following OS preference");
                self.activator.activate(&mut self.page, color_mode);
            }
            None => {}
        }
    }

    /// Best-effort persistence: the visual state is already applied, a
    /// failed save only means the choice won't survive a reload.
    fn persist(&self, mode: ThemeMode) {
        match self.store.save(&self.site, mode) {
            Ok(()) => debug!(site = %self.site, mode = %mode, "theme choice saved"),
            Err(err) => {
                warn!(site = %self.site, error = %err, "failed to persist theme choice");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::set_mode_detector;
    use serial_test::serial;
    use umbra_engine::{props, ColorMode, Element};
    use umbra_store::MemoryStore;

    fn shared_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn startup_without_record_leaves_page_untouched() {
        let session = Session::start(
            "example.com",
            Page::new(),
            shared_store(),
            SessionConfig::default(),
        );
        assert!(session.page().body().inline().is_empty());
    }

    #[test]
    fn startup_reapplies_saved_mode() {
        let store = shared_store();
        let site = SiteKey::from_hostname("example.com");
        store.save(&site, ThemeMode::Dark).unwrap();

        let session = Session::start(
            "example.com",
            Page::new(),
            store,
            SessionConfig::default(),
        );
        assert_eq!(
            session.page().body().computed(props::BACKGROUND),
            Some("#1a1a1a")
        );
    }

    #[test]
    fn startup_treats_saved_reset_as_no_preference() {
        let store = shared_store();
        store
            .save(&SiteKey::from_hostname("example.com"), ThemeMode::Reset)
            .unwrap();

        let session = Session::start(
            "example.com",
            Page::new(),
            store,
            SessionConfig::default(),
        );
        assert!(session.page().body().inline().is_empty());
    }

    #[test]
    #[serial]
    fn startup_follows_os_preference_when_enabled() {
        set_mode_detector(|| ColorMode::Dark);

        let session = Session::start(
            "example.com",
            Page::new(),
            shared_store(),
            SessionConfig::default().with_os_default(true),
        );
        assert_eq!(
            session.page().body().computed(props::BACKGROUND),
            Some("#1a1a1a")
        );

        set_mode_detector(|| ColorMode::Light);
    }

    #[test]
    #[serial]
    fn os_preference_does_not_override_saved_reset() {
        set_mode_detector(|| ColorMode::Dark);

        let store = shared_store();
        store
            .save(&SiteKey::from_hostname("example.com"), ThemeMode::Reset)
            .unwrap();

        let session = Session::start(
            "example.com",
            Page::new(),
            store,
            SessionConfig::default().with_os_default(true),
        );
        assert!(session.page().body().inline().is_empty());

        set_mode_detector(|| ColorMode::Light);
    }

    #[test]
    fn handle_persists_every_mode() {
        let store = shared_store();
        let mut session = Session::start(
            "example.com",
            Page::new(),
            store.clone(),
            SessionConfig::default(),
        );
        let site = SiteKey::from_hostname("example.com");

        assert!(session.handle(ThemeCommand::ApplyDark).success);
        assert_eq!(store.load(&site).unwrap(), Some(ThemeMode::Dark));

        assert!(session.handle(ThemeCommand::Reset).success);
        assert_eq!(store.load(&site).unwrap(), Some(ThemeMode::Reset));
    }

    #[test]
    fn custom_palette_drives_fallback() {
        let config = SessionConfig::default().with_palette(
            Palette::from_yaml(
                r##"
dark:
  body_background: "#0b0f14"
  body_text: "#d0d4d8"
  control_background: "#16212b"
  control_text: "#eceff1"
  control_border: "#2e3c48"
  variables: {}
"##,
            )
            .unwrap(),
        );

        let mut session = Session::start("example.com", Page::new(), shared_store(), config);
        session.handle(ThemeCommand::ApplyDark);
        assert_eq!(
            session.page().body().computed(props::BACKGROUND),
            Some("#0b0f14")
        );
    }

    #[test]
    fn session_detects_native_support_at_start() {
        let page = Page::new().with_root(Element::new().with_attribute("data-theme", "light"));
        let session = Session::start(
            "example.com",
            page,
            shared_store(),
            SessionConfig::default(),
        );
        assert!(session.activator().report().attribute_theming);
    }
}
