//! Host page contract: selectors, class names, labels, and timings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The markup and stylesheets are owned by the server-rendered templates.
//! `PageConfig::default()` matches the stock templates. A page may override
//! any subset through a JSON `<script id="page-config">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CHAR_DELAY_MS, DARK_STYLESHEET, LIGHT_STYLESHEET, PLACEHOLDER_IMAGE, REVEAL_THRESHOLD, THEME_STORAGE_KEY,
};
use crate::error::PageError;
use crate::theme::Theme;

/// CSS selectors for every element the controller touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub search_input: String,
    pub tag_button: String,
    pub results: String,
    pub result_card: String,
    pub theme_stylesheet: String,
    pub settings_switch: String,
    pub tagline: String,
    /// Icon element inside a toggle control.
    pub toggle_icon: String,
    /// Label element inside a toggle control.
    pub toggle_label: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            search_input: ".search-bar".into(),
            tag_button: ".tag-button".into(),
            results: ".tutor-results".into(),
            result_card: ".tutor-card".into(),
            theme_stylesheet: "#theme-stylesheet".into(),
            settings_switch: "#theme-toggle-setting".into(),
            tagline: "#animated-text".into(),
            toggle_icon: "i".into(),
            toggle_label: ".theme-text".into(),
        }
    }
}

/// A theme toggle button variant and the labels it shows.
///
/// The label always names the theme the button switches *to*.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleControl {
    pub selector: String,
    pub dark_label: String,
    pub light_label: String,
}

impl ToggleControl {
    #[must_use]
    pub fn label_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark_label,
            Theme::Light => &self.light_label,
        }
    }
}

/// Per-theme body classes, icons, and stylesheet file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeStyle {
    pub stylesheet: String,
    pub body_classes: Vec<String>,
    /// Icon class shown on a toggle that switches *to* this theme.
    pub icon_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub toggles: Vec<ToggleControl>,
    pub dark: ThemeStyle,
    pub light: ThemeStyle,
    pub storage_key: String,
    pub placeholder_image: String,
    pub result_card_class: String,
    pub fade_in_class: String,
    pub reveal_threshold: f64,
    pub char_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            toggles: vec![
                ToggleControl {
                    selector: "#theme-toggle".into(),
                    dark_label: "Dark".into(),
                    light_label: "Light".into(),
                },
                ToggleControl {
                    selector: "#theme-toggle-mobile".into(),
                    dark_label: "Dark Theme".into(),
                    light_label: "Light Theme".into(),
                },
            ],
            dark: ThemeStyle {
                stylesheet: DARK_STYLESHEET.into(),
                body_classes: vec!["bg-slate-900".into(), "text-gray-200".into()],
                icon_class: "fas fa-moon".into(),
            },
            light: ThemeStyle {
                stylesheet: LIGHT_STYLESHEET.into(),
                body_classes: vec!["bg-slate-50".into(), "text-gray-800".into()],
                icon_class: "fas fa-sun".into(),
            },
            storage_key: THEME_STORAGE_KEY.into(),
            placeholder_image: PLACEHOLDER_IMAGE.into(),
            result_card_class: "tutor-card".into(),
            fade_in_class: "fade-in".into(),
            reveal_threshold: REVEAL_THRESHOLD,
            char_delay_ms: CHAR_DELAY_MS,
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] when the JSON is malformed or a field has
    /// the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn style(&self, theme: Theme) -> &ThemeStyle {
        match theme {
            Theme::Dark => &self.dark,
            Theme::Light => &self.light,
        }
    }
}
