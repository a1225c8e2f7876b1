//! Dark/light theme resolution, application, and persistence.
//!
//! The active theme is read back from the page itself (which stylesheet the
//! theme `<link>` points at) and applied by swapping that stylesheet, the
//! body color classes, and the toggle button icons/labels. The preference is
//! persisted through an injected [`ThemeStore`].
//!
//! TRADE-OFFS
//! ==========
//! Without a theme stylesheet on the page the resolved theme is always
//! `Dark`, so a toggle click there always moves to `Light`. Body classes and
//! toggle labels still follow every `set_theme` call.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::config::PageConfig;
use crate::dom::{Dom, KeyValueStore};
use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a persisted value. Only the exact literals are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The theme a toggle switches to.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted theme preference with explicit read/write accessors.
pub struct ThemeStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Stored preference, or `Dark` when nothing valid is stored.
    pub fn read(&self) -> Theme {
        self.store.get(&self.key).and_then(|raw| Theme::parse(&raw)).unwrap_or_default()
    }

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Propagates the backing store's failure.
    pub fn write(&self, theme: Theme) -> Result<(), PageError> {
        self.store.set(&self.key, theme.as_str())
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}

/// Resolve the active theme from the theme stylesheet reference.
pub fn current_theme<D: Dom>(dom: &D, config: &PageConfig) -> Theme {
    let Some(link) = dom.query(&config.selectors.theme_stylesheet) else {
        return Theme::Dark;
    };
    match dom.attribute(&link, "href") {
        Some(href) if href.contains(config.light.stylesheet.as_str()) => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Replace the file name of `href`, keeping its directory.
#[must_use]
pub fn sibling_stylesheet(href: &str, file: &str) -> String {
    match href.rfind('/') {
        Some(idx) => format!("{}{file}", &href[..=idx]),
        None => file.to_owned(),
    }
}

/// Apply `theme` to the stylesheet, body classes, and toggle controls.
///
/// Applying the same theme twice leaves the page unchanged.
///
/// # Errors
///
/// Returns the first DOM mutation that the browser rejected.
pub fn set_theme<D: Dom>(dom: &D, config: &PageConfig, theme: Theme) -> Result<(), PageError> {
    let style = config.style(theme);

    if let Some(link) = dom.query(&config.selectors.theme_stylesheet) {
        let href = dom.attribute(&link, "href").unwrap_or_default();
        dom.set_attribute(&link, "href", &sibling_stylesheet(&href, &style.stylesheet))?;
    }

    if let Some(body) = dom.body() {
        for class in &config.style(theme.other()).body_classes {
            dom.remove_class(&body, class)?;
        }
        for class in &style.body_classes {
            dom.add_class(&body, class)?;
        }
    }

    // Toggles advertise the theme they switch to.
    let next = theme.other();
    for control in &config.toggles {
        let Some(button) = dom.query(&control.selector) else {
            continue;
        };
        if let Some(icon) = dom.query_within(&button, &config.selectors.toggle_icon) {
            dom.set_class_name(&icon, &config.style(next).icon_class);
        }
        if let Some(label) = dom.query_within(&button, &config.selectors.toggle_label) {
            dom.set_text_content(&label, control.label_for(next));
        }
    }

    log::debug!("theme applied: {theme}");
    Ok(())
}

/// Apply `theme`, persist it, and sync the settings switch.
///
/// # Errors
///
/// Returns the first DOM or storage failure.
pub fn apply_and_persist<D: Dom, S: KeyValueStore>(
    dom: &D,
    store: &ThemeStore<S>,
    config: &PageConfig,
    theme: Theme,
) -> Result<(), PageError> {
    set_theme(dom, config, theme)?;
    sync_settings_switch(dom, config, theme);
    store.write(theme)
}

/// Flip the current theme. Returns the newly active theme.
///
/// # Errors
///
/// Returns the first DOM or storage failure.
pub fn toggle<D: Dom, S: KeyValueStore>(
    dom: &D,
    store: &ThemeStore<S>,
    config: &PageConfig,
) -> Result<Theme, PageError> {
    let next = current_theme(dom, config).other();
    apply_and_persist(dom, store, config, next)?;
    Ok(next)
}

/// Theme chosen by the settings checkbox.
#[must_use]
pub fn theme_for_switch(checked: bool) -> Theme {
    if checked { Theme::Light } else { Theme::Dark }
}

/// Check the settings switch iff `theme` is light.
pub fn sync_settings_switch<D: Dom>(dom: &D, config: &PageConfig, theme: Theme) {
    if let Some(switch) = dom.query(&config.selectors.settings_switch) {
        dom.set_checked(&switch, theme == Theme::Light);
    }
}

/// Page-load initialization: apply the stored preference (default dark).
///
/// # Errors
///
/// Returns the first DOM failure while applying the theme.
pub fn init<D: Dom, S: KeyValueStore>(dom: &D, store: &ThemeStore<S>, config: &PageConfig) -> Result<Theme, PageError> {
    let saved = store.read();
    set_theme(dom, config, saved)?;
    sync_settings_switch(dom, config, current_theme(dom, config));
    Ok(saved)
}
