//! Inbound command handling.
//!
//! Theme commands arrive from a separate UI surface as small JSON messages
//! (`{"action": "applyDarkTheme"}`). [`ThemeCommand`] is the closed set of
//! actions; [`dispatch_raw`] parses a raw message and routes it to a
//! session. Unknown actions are logged and ignored: the sender still gets
//! a success acknowledgment, and nothing on the page changes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use umbra_engine::ThemeMode;

use crate::session::Session;

/// A theme command from the controlling surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCommand {
    /// Apply the dark theme.
    ApplyDark,
    /// Apply the light theme.
    ApplyLight,
    /// Return the page to its original appearance.
    Reset,
}

impl ThemeCommand {
    /// Parses a wire action name.
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "applyDarkTheme" => Some(ThemeCommand::ApplyDark),
            "applyLightTheme" => Some(ThemeCommand::ApplyLight),
            "resetTheme" => Some(ThemeCommand::Reset),
            _ => None,
        }
    }

    /// The wire action name.
    pub fn wire_name(self) -> &'static str {
        match self {
            ThemeCommand::ApplyDark => "applyDarkTheme",
            ThemeCommand::ApplyLight => "applyLightTheme",
            ThemeCommand::Reset => "resetTheme",
        }
    }

    /// The theme mode this command applies.
    pub fn mode(self) -> ThemeMode {
        match self {
            ThemeCommand::ApplyDark => ThemeMode::Dark,
            ThemeCommand::ApplyLight => ThemeMode::Light,
            ThemeCommand::Reset => ThemeMode::Reset,
        }
    }
}

/// Acknowledgment returned to the command's sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Whether the command was handled.
    pub success: bool,
    /// Error description, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Ack {
    /// A success acknowledgment.
    pub fn ok() -> Self {
        Ack {
            success: true,
            error: None,
        }
    }

    /// A failure acknowledgment with a description.
    pub fn failure(message: impl Into<String>) -> Self {
        Ack {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    action: String,
}

/// Parses a raw JSON message and routes it to a session.
///
/// Malformed messages and unknown actions are diagnostics, not failures:
/// they are logged, the page is left untouched, and the sender is
/// acknowledged with success.
pub fn dispatch_raw(session: &mut Session, raw: &str) -> Ack {
    let envelope: Envelope = match serde_json::from_str(raw) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(error = %err, "ignoring malformed theme message");
            return Ack::ok();
        }
    };

    match ThemeCommand::parse(&envelope.action) {
        Some(command) => session.handle(command),
        None => {
            warn!(action = %envelope.action, "ignoring unknown theme action");
            Ack::ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_actions() {
        assert_eq!(
            ThemeCommand::parse("applyDarkTheme"),
            Some(ThemeCommand::ApplyDark)
        );
        assert_eq!(
            ThemeCommand::parse("applyLightTheme"),
            Some(ThemeCommand::ApplyLight)
        );
        assert_eq!(ThemeCommand::parse("resetTheme"), Some(ThemeCommand::Reset));
        assert_eq!(ThemeCommand::parse("explodeTheme"), None);
    }

    #[test]
    fn wire_names_round_trip() {
        for command in [
            ThemeCommand::ApplyDark,
            ThemeCommand::ApplyLight,
            ThemeCommand::Reset,
        ] {
            assert_eq!(ThemeCommand::parse(command.wire_name()), Some(command));
        }
    }

    #[test]
    fn commands_map_to_modes() {
        assert_eq!(ThemeCommand::ApplyDark.mode(), ThemeMode::Dark);
        assert_eq!(ThemeCommand::ApplyLight.mode(), ThemeMode::Light);
        assert_eq!(ThemeCommand::Reset.mode(), ThemeMode::Reset);
    }

    #[test]
    fn ack_serializes_like_the_wire_format() {
        let json = serde_json::to_string(&Ack::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);

        let json = serde_json::to_string(&Ack::failure("boom")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"boom"}"#);
    }
}
