//! Fade-in of tutor cards as they scroll into view.
//!
//! Cards are captured once at page setup. Cards rendered later by a search
//! are not tracked and never fade in until the page reloads. The class is
//! only ever added, so a card stays visible after it leaves the viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::PageConfig;
use crate::consts::REVEAL_RATIO_TOLERANCE;
use crate::dom::Dom;
use crate::error::PageError;

/// One visibility change reported for an observed element.
#[derive(Debug, Clone)]
pub struct Intersection<N> {
    pub target: N,
    pub ratio: f64,
    pub is_intersecting: bool,
}

pub struct RevealWatcher<N> {
    targets: Vec<N>,
    threshold: f64,
    class: String,
}

impl<N: Clone + PartialEq> RevealWatcher<N> {
    /// Capture every result card currently in the document.
    pub fn register<D: Dom<Node = N>>(dom: &D, config: &PageConfig) -> Self {
        let targets = dom.query_all(&config.selectors.result_card);
        log::debug!("reveal watching {} cards", targets.len());
        Self { targets, threshold: config.reveal_threshold, class: config.fade_in_class.clone() }
    }

    /// Elements captured at setup.
    pub fn targets(&self) -> &[N] {
        &self.targets
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn is_registered(&self, node: &N) -> bool {
        self.targets.contains(node)
    }

    /// Apply a batch of visibility changes. Returns how many entries revealed
    /// their target.
    ///
    /// # Errors
    ///
    /// Returns the first class mutation the browser rejected.
    pub fn on_intersection<D: Dom<Node = N>>(&self, dom: &D, entries: &[Intersection<N>]) -> Result<usize, PageError> {
        let mut revealed = 0;
        for entry in entries {
            let visible = entry.is_intersecting && entry.ratio + REVEAL_RATIO_TOLERANCE >= self.threshold;
            if !visible || !self.is_registered(&entry.target) {
                continue;
            }
            dom.add_class(&entry.target, &self.class)?;
            revealed += 1;
        }
        Ok(revealed)
    }
}
