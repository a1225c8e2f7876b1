//! Page behavior controller.
//!
//! ARCHITECTURE
//! ============
//! `PageController` owns the document handle, the theme store, the search
//! provider, and the notifier. Each `on_*` method is one DOM event. The
//! browser shell only translates raw events into these calls, so every
//! behavior can be driven from tests with an in-memory document.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::dom::{Dom, KeyValueStore, Notifier};
use crate::error::PageError;
use crate::reveal::{Intersection, RevealWatcher};
use crate::search::{self, SearchProvider, SearchQuery};
use crate::theme::{self, Theme, ThemeStore};
use crate::typewriter::{self, ScheduledGlyph};

/// Everything `init` produced that the host must keep driving.
pub struct Startup<N> {
    pub theme: Theme,
    pub reveal: RevealWatcher<N>,
    pub glyphs: Vec<ScheduledGlyph<N>>,
}

pub struct PageController<D, S, P, N> {
    dom: D,
    store: ThemeStore<S>,
    provider: P,
    notifier: N,
    config: PageConfig,
}

impl<D, S, P, N> PageController<D, S, P, N>
where
    D: Dom,
    S: KeyValueStore,
    P: SearchProvider,
    N: Notifier,
{
    pub fn new(dom: D, store: S, provider: P, notifier: N, config: PageConfig) -> Self {
        let store = ThemeStore::new(store, config.storage_key.clone());
        Self { dom, store, provider, notifier, config }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn store(&self) -> &ThemeStore<S> {
        &self.store
    }

    /// DOM-ready: apply the saved theme, capture cards, and lay out the tagline.
    ///
    /// Each step runs even if an earlier one failed. Failures are logged.
    pub fn init(&self) -> Startup<D::Node> {
        let theme = match theme::init(&self.dom, &self.store, &self.config) {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!("theme init failed: {err}");
                self.store.read()
            }
        };
        let reveal = RevealWatcher::register(&self.dom, &self.config);
        let glyphs = match typewriter::start(&self.dom, &self.config) {
            Ok(glyphs) => glyphs,
            Err(err) => {
                log::warn!("tagline animation failed: {err}");
                Vec::new()
            }
        };
        log::info!("page initialized with {theme} theme");
        Startup { theme, reveal, glyphs }
    }

    // --- Search ---

    /// Key press inside the search box. Returns whether a search ran.
    ///
    /// # Errors
    ///
    /// Returns a DOM failure while rendering results.
    pub fn on_search_key(&self, key: &str, raw_value: &str) -> Result<bool, PageError> {
        let Some(query) = search::query_for_key(key, raw_value) else {
            return Ok(false);
        };
        self.search(&query)?;
        Ok(true)
    }

    /// Click on a tag button: search for its label.
    ///
    /// # Errors
    ///
    /// Returns a DOM failure while rendering results.
    pub fn on_tag_click(&self, tag: &D::Node) -> Result<(), PageError> {
        let query = SearchQuery::from_tag_label(&self.dom.text_content(tag));
        self.search(&query)
    }

    /// # Errors
    ///
    /// Returns a DOM failure while rendering results.
    pub fn search(&self, query: &SearchQuery) -> Result<(), PageError> {
        search::perform_search(&self.dom, &self.provider, &self.notifier, &self.config, query)
    }

    // --- Theme ---

    /// Click on a theme toggle button.
    ///
    /// # Errors
    ///
    /// Returns a DOM or storage failure.
    pub fn on_theme_toggle(&self) -> Result<Theme, PageError> {
        theme::toggle(&self.dom, &self.store, &self.config)
    }

    /// Change event from the settings checkbox.
    ///
    /// # Errors
    ///
    /// Returns a DOM or storage failure.
    pub fn on_settings_change(&self, checked: bool) -> Result<Theme, PageError> {
        let next = theme::theme_for_switch(checked);
        theme::apply_and_persist(&self.dom, &self.store, &self.config, next)?;
        Ok(next)
    }

    #[must_use]
    pub fn current_theme(&self) -> Theme {
        theme::current_theme(&self.dom, &self.config)
    }

    // --- Animation ---

    /// Visibility changes for registered result cards.
    ///
    /// # Errors
    ///
    /// Returns a DOM failure while adding the fade-in class.
    pub fn on_intersection(
        &self,
        watcher: &RevealWatcher<D::Node>,
        entries: &[Intersection<D::Node>],
    ) -> Result<usize, PageError> {
        watcher.on_intersection(&self.dom, entries)
    }

    /// Timer expiry for one tagline glyph.
    ///
    /// # Errors
    ///
    /// Returns the DOM failure if the glyph could not be shown.
    pub fn on_glyph_due(&self, node: &D::Node) -> Result<(), PageError> {
        typewriter::reveal(&self.dom, node)
    }
}
