//! Shared constants for the page controller.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Theme assets ────────────────────────────────────────────────

/// Stylesheet file for the dark theme.
pub const DARK_STYLESHEET: &str = "style.css";

/// Stylesheet file for the light theme, expected next to [`DARK_STYLESHEET`].
pub const LIGHT_STYLESHEET: &str = "style-light.css";

// ── Search ──────────────────────────────────────────────────────

/// Image used by every simulated result card.
pub const PLACEHOLDER_IMAGE: &str = "tutor-sample.jpg";

// ── Animation ───────────────────────────────────────────────────

/// Delay between consecutive tagline characters, in milliseconds.
pub const CHAR_DELAY_MS: u32 = 50;

/// Fraction of a card that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Slack for browsers reporting a crossing ratio just under the threshold.
pub const REVEAL_RATIO_TOLERANCE: f64 = 1e-6;

/// Attribute set on the tagline once it has been typed.
pub const TYPED_MARKER_ATTR: &str = "data-typed";

// ── Host page ───────────────────────────────────────────────────

/// Id of the optional JSON element overriding [`crate::config::PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "page-config";
