//! Browser shell: binds [`PageController`] to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the WASM module is instantiated. It waits for the DOM to
//! be parsed, builds the controller, and registers one listener per control.
//! Listeners, the intersection observer, and typewriter timers live for the
//! whole page, so their closures are leaked with `forget`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here reaches the user. Failed browser calls are logged at `warn`
//! and the remaining wiring continues.

mod dom;
mod storage;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, Window,
};

pub use dom::WebDom;
pub use storage::{AlertNotifier, LocalStore};

use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::controller::PageController;
use crate::dom::Dom;
use crate::error::PageError;
use crate::reveal::{Intersection, RevealWatcher};
use crate::search::SimulatedSearch;
use crate::typewriter::ScheduledGlyph;

type WebController = PageController<WebDom, LocalStore, SimulatedSearch, AlertNotifier>;

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn js_error(value: JsValue) -> PageError {
    PageError::Dom(js_message(&value))
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {err}");
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let mut pending = Some(window);
        let result = listen(&document, "DOMContentLoaded", move |_event| {
            if let Some(window) = pending.take() {
                boot(&window);
            }
        });
        if let Err(err) = result {
            log::warn!("could not wait for DOMContentLoaded: {err}");
        }
    } else {
        boot(&window);
    }
}

/// Register a page-lifetime event listener.
fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PageError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
        .map_err(js_error)?;
    callback.forget();
    Ok(())
}

/// Page config from the optional JSON element, falling back to defaults.
fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring page config: {err}");
            PageConfig::default()
        }
    }
}

fn boot(window: &Window) {
    let Some(document) = window.document() else {
        return;
    };
    let config = load_config(&document);
    let controller = Rc::new(PageController::new(
        WebDom::new(document),
        LocalStore::from_window(window),
        SimulatedSearch::new(config.placeholder_image.clone()),
        AlertNotifier::new(window.clone()),
        config,
    ));

    let startup = controller.init();

    let wiring = [
        ("theme toggles", wire_theme_toggles(&controller)),
        ("settings switch", wire_settings_switch(&controller)),
        ("search bar", wire_search_input(&controller)),
        ("tag buttons", wire_tag_buttons(&controller)),
        ("reveal observer", observe_cards(&controller, startup.reveal)),
    ];
    for (what, result) in wiring {
        if let Err(err) = result {
            log::warn!("{what} not wired: {err}");
        }
    }

    schedule_glyphs(&controller, startup.glyphs);
}

fn wire_theme_toggles(controller: &Rc<WebController>) -> Result<(), PageError> {
    for control in &controller.config().toggles {
        let Some(button) = controller.dom().query(&control.selector) else {
            continue;
        };
        let ctl = Rc::clone(controller);
        listen(&button, "click", move |_event| {
            if let Err(err) = ctl.on_theme_toggle() {
                log::warn!("theme toggle failed: {err}");
            }
        })?;
    }
    Ok(())
}

fn wire_settings_switch(controller: &Rc<WebController>) -> Result<(), PageError> {
    let Some(switch) = controller.dom().query(&controller.config().selectors.settings_switch) else {
        return Ok(());
    };
    let ctl = Rc::clone(controller);
    let input = switch.clone();
    listen(&switch, "change", move |_event| {
        let checked = input.dyn_ref::<HtmlInputElement>().is_some_and(HtmlInputElement::checked);
        if let Err(err) = ctl.on_settings_change(checked) {
            log::warn!("settings theme change failed: {err}");
        }
    })
}

fn wire_search_input(controller: &Rc<WebController>) -> Result<(), PageError> {
    let Some(field) = controller.dom().query(&controller.config().selectors.search_input) else {
        return Ok(());
    };
    let ctl = Rc::clone(controller);
    let input = field.clone();
    listen(&field, "keypress", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let value = input.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value).unwrap_or_default();
        if let Err(err) = ctl.on_search_key(&key_event.key(), &value) {
            log::warn!("search failed: {err}");
        }
    })
}

fn wire_tag_buttons(controller: &Rc<WebController>) -> Result<(), PageError> {
    for tag in controller.dom().query_all(&controller.config().selectors.tag_button) {
        let ctl = Rc::clone(controller);
        let label = tag.clone();
        listen(&tag, "click", move |_event| {
            if let Err(err) = ctl.on_tag_click(&label) {
                log::warn!("tag search failed: {err}");
            }
        })?;
    }
    Ok(())
}

fn observe_cards(controller: &Rc<WebController>, watcher: RevealWatcher<Element>) -> Result<(), PageError> {
    if watcher.targets().is_empty() {
        return Ok(());
    }
    let targets = watcher.targets().to_vec();
    let threshold = watcher.threshold();
    let ctl = Rc::clone(controller);

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let batch: Vec<Intersection<Element>> = entries
            .iter()
            .filter_map(|value| value.dyn_ref::<IntersectionObserverEntry>().cloned())
            .map(|entry| Intersection {
                target: entry.target(),
                ratio: entry.intersection_ratio(),
                is_intersecting: entry.is_intersecting(),
            })
            .collect();
        if let Err(err) = ctl.on_intersection(&watcher, &batch) {
            log::warn!("card reveal failed: {err}");
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).map_err(js_error)?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

fn schedule_glyphs(controller: &Rc<WebController>, glyphs: Vec<ScheduledGlyph<Element>>) {
    for glyph in glyphs {
        let ctl = Rc::clone(controller);
        Timeout::new(glyph.reveal_at_ms, move || {
            if let Err(err) = ctl.on_glyph_due(&glyph.node) {
                log::warn!("glyph reveal failed: {err}");
            }
        })
        .forget();
    }
}
