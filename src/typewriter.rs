//! Tagline typing effect.
//!
//! The tagline's text is split into one `<span>` per character. Every span
//! starts transparent and is revealed `char_delay_ms * index` after start.
//! Whitespace takes a slot like any other character. The tagline is marked
//! once typed, so a second `start` on the same page does nothing.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::config::PageConfig;
use crate::consts::TYPED_MARKER_ATTR;
use crate::dom::Dom;
use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaglineGlyph {
    pub index: usize,
    pub ch: char,
    pub reveal_at_ms: u32,
}

/// A created glyph span and when to reveal it.
#[derive(Debug, Clone)]
pub struct ScheduledGlyph<N> {
    pub node: N,
    pub reveal_at_ms: u32,
}

/// Reveal schedule for `text`, in character order.
#[must_use]
pub fn plan(text: &str, step_ms: u32) -> Vec<TaglineGlyph> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            let slot = u32::try_from(index).unwrap_or(u32::MAX);
            TaglineGlyph { index, ch, reveal_at_ms: step_ms.saturating_mul(slot) }
        })
        .collect()
}

/// Replace the tagline text with hidden glyph spans.
///
/// Returns the spans to reveal, or an empty schedule when there is no tagline
/// or it was already typed.
///
/// # Errors
///
/// Returns the first DOM failure. Spans are built off-document first, so a
/// failure leaves the tagline showing its original text.
pub fn start<D: Dom>(dom: &D, config: &PageConfig) -> Result<Vec<ScheduledGlyph<D::Node>>, PageError> {
    let Some(tagline) = dom.query(&config.selectors.tagline) else {
        return Ok(Vec::new());
    };
    if dom.attribute(&tagline, TYPED_MARKER_ATTR).is_some() {
        return Ok(Vec::new());
    }

    let text = dom.text_content(&tagline);
    let mut scheduled = Vec::with_capacity(text.len());
    for glyph in plan(&text, config.char_delay_ms) {
        let span = dom.create_element("span")?;
        dom.set_text_content(&span, glyph.ch.encode_utf8(&mut [0; 4]));
        dom.set_style(&span, "opacity", "0")?;
        scheduled.push(ScheduledGlyph { node: span, reveal_at_ms: glyph.reveal_at_ms });
    }
    dom.set_attribute(&tagline, TYPED_MARKER_ATTR, "true")?;

    dom.set_text_content(&tagline, "");
    for glyph in &scheduled {
        if let Err(err) = dom.append_child(&tagline, &glyph.node) {
            dom.set_text_content(&tagline, &text);
            return Err(err);
        }
    }

    log::debug!("tagline typing {} glyphs", scheduled.len());
    Ok(scheduled)
}

/// Make one glyph span visible.
///
/// # Errors
///
/// Returns the DOM failure if the style could not be set.
pub fn reveal<D: Dom>(dom: &D, node: &D::Node) -> Result<(), PageError> {
    dom.set_style(node, "opacity", "1")
}
