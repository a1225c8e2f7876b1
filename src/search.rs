//! Tutor search: query parsing, the lookup seam, and result rendering.
//!
//! DESIGN
//! ======
//! There is no search backend yet. [`SimulatedSearch`] synthesizes one card
//! from the query and the page shows a blocking notice first. Swapping in a
//! real [`SearchProvider`] does not change how the search box and tag
//! buttons are wired.
//!
//! Query text is embedded into card markup verbatim. Queries come from the
//! page's own search box and tag labels and are treated as display-safe.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::fmt;

use crate::config::PageConfig;
use crate::dom::{Dom, Notifier};
use crate::error::PageError;

/// Trimmed search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim `raw`. Empty or whitespace-only input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() { None } else { Some(Self(trimmed.to_owned())) }
    }

    /// Query from a tag button label. Labels are not gated on emptiness.
    #[must_use]
    pub fn from_tag_label(label: &str) -> Self {
        Self(label.trim().to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query for a key press in the search box: Enter with non-empty text only.
#[must_use]
pub fn query_for_key(key: &str, raw_value: &str) -> Option<SearchQuery> {
    if key == "Enter" { SearchQuery::parse(raw_value) } else { None }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub title: String,
    pub description: String,
    pub image_ref: String,
}

impl ResultCard {
    /// Inner markup of the card element.
    #[must_use]
    pub fn markup(&self) -> String {
        format!(
            "<img src=\"{}\" alt=\"Sample Tutor\"><div><h3>{}</h3><p>{}</p></div>",
            self.image_ref, self.title, self.description
        )
    }
}

/// Source of search results.
pub trait SearchProvider {
    fn lookup(&self, query: &SearchQuery) -> ResultCard;
}

/// Placeholder provider producing one sample card per query.
pub struct SimulatedSearch {
    image_ref: String,
}

impl SimulatedSearch {
    pub fn new(image_ref: impl Into<String>) -> Self {
        Self { image_ref: image_ref.into() }
    }
}

impl SearchProvider for SimulatedSearch {
    fn lookup(&self, query: &SearchQuery) -> ResultCard {
        ResultCard {
            title: format!("{query} Tutor - Sample Subject"),
            description: format!("Sample description for {query} tutor. Customize this with real data."),
            image_ref: self.image_ref.clone(),
        }
    }
}

/// Notice shown before results are replaced.
#[must_use]
pub fn notice_for(query: &SearchQuery) -> String {
    format!("Searching for: {query}")
}

/// Run a search and replace the results container with the returned card.
///
/// Without a results container only the notice is shown.
///
/// # Errors
///
/// Returns a DOM failure while building or appending the card. The card is
/// built before the container is cleared, so a failed build keeps the
/// previous results.
pub fn perform_search<D, P, N>(
    dom: &D,
    provider: &P,
    notifier: &N,
    config: &PageConfig,
    query: &SearchQuery,
) -> Result<(), PageError>
where
    D: Dom,
    P: SearchProvider + ?Sized,
    N: Notifier + ?Sized,
{
    notifier.notice(&notice_for(query));

    let Some(results) = dom.query(&config.selectors.results) else {
        return Ok(());
    };

    let card = provider.lookup(query);
    let element = dom.create_element("div")?;
    dom.add_class(&element, &config.result_card_class)?;
    dom.set_inner_html(&element, &card.markup());

    dom.set_inner_html(&results, "");
    dom.append_child(&results, &element)?;

    log::debug!("search rendered: {query}");
    Ok(())
}
