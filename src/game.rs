//! Game loader
//!
//! Validates a pasted URL, then shows it in the embedded frame or opens it
//! in a new tab. Any well-formed absolute URL is accepted.

use url::Url;

use crate::consts::INVALID_GAME_URL_ALERT;
use crate::error::{Error, Result};
use crate::port::RenderPort;

/// Parse `raw` (trimmed) as an absolute URL and return its canonical form
pub fn canonicalize_url(raw: &str) -> Result<String> {
    let input = raw.trim();
    Url::parse(input)
        .map(String::from)
        .map_err(|source| Error::InvalidUrl {
            input: input.to_string(),
            source,
        })
}

/// Loads external games into the page
pub struct GameLoader {
    invalid_url_alert: &'static str,
}

impl Default for GameLoader {
    fn default() -> Self {
        Self {
            invalid_url_alert: INVALID_GAME_URL_ALERT,
        }
    }
}

impl GameLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `raw` in the embedded frame and focus it.
    ///
    /// Invalid input alerts the user and leaves the frame untouched.
    pub fn load_embedded(&self, port: &mut impl RenderPort, raw: &str) -> Result<String> {
        let url = self.validate(port, raw)?;
        port.set_frame_source(&url);
        port.focus_frame();
        log::info!("Game frame loaded: {}", url);
        Ok(url)
    }

    /// Open `raw` in a new tab that cannot reach back to this page
    pub fn open_external(&self, port: &mut impl RenderPort, raw: &str) -> Result<String> {
        let url = self.validate(port, raw)?;
        port.open_window(&url);
        log::info!("Game opened in new tab: {}", url);
        Ok(url)
    }

    fn validate(&self, port: &mut impl RenderPort, raw: &str) -> Result<String> {
        canonicalize_url(raw).inspect_err(|e| {
            log::warn!("Rejected game URL: {}", e);
            port.alert(self.invalid_url_alert);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::testing::RecordingPort;

    #[test]
    fn test_canonicalize_keeps_canonical_url() {
        assert_eq!(
            canonicalize_url("https://example.com/x").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_canonicalize_normalizes() {
        assert_eq!(
            canonicalize_url("  HTTPS://Example.COM  ").unwrap(),
            "https://example.com/"
        );
        assert_eq!(
            canonicalize_url("https://atharvodin.github.io/Fail-Game/").unwrap(),
            "https://atharvodin.github.io/Fail-Game/"
        );
    }

    #[test]
    fn test_canonicalize_rejects_relative_and_garbage() {
        for bad in ["not a url", "", "   ", "/relative/path", "example.com", "http://"] {
            assert!(
                matches!(canonicalize_url(bad), Err(Error::InvalidUrl { .. })),
                "should reject {bad:?}"
            );
        }
    }

    #[test]
    fn test_load_embedded_sets_frame() {
        let mut port = RecordingPort::default();
        let url = GameLoader::new()
            .load_embedded(&mut port, "https://example.com/x")
            .unwrap();
        assert_eq!(url, "https://example.com/x");
        assert_eq!(port.frame_src.as_deref(), Some("https://example.com/x"));
        assert!(port.frame_focused);
        assert!(port.alerts.is_empty());
    }

    #[test]
    fn test_load_embedded_invalid_alerts() {
        let mut port = RecordingPort::default();
        let loader = GameLoader::new();
        loader
            .load_embedded(&mut port, "https://example.com/x")
            .unwrap();

        assert!(loader.load_embedded(&mut port, "not a url").is_err());
        assert_eq!(port.frame_src.as_deref(), Some("https://example.com/x"));
        assert_eq!(port.alerts, vec![INVALID_GAME_URL_ALERT.to_string()]);
    }

    #[test]
    fn test_open_external() {
        let mut port = RecordingPort::default();
        let loader = GameLoader::new();

        loader
            .open_external(&mut port, "https://example.com/game")
            .unwrap();
        assert_eq!(port.opened, vec!["https://example.com/game".to_string()]);
        assert!(port.frame_src.is_none());

        assert!(loader.open_external(&mut port, "not a url").is_err());
        assert_eq!(port.opened.len(), 1);
        assert!(port.frame_src.is_none());
        assert_eq!(port.alerts, vec![INVALID_GAME_URL_ALERT.to_string()]);
    }
}
