//! Page behavior controller for the tutoring site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It wires the
//! landing/settings page behavior: theme switching persisted in
//! `localStorage`, the simulated tutor search, scroll-reveal of tutor cards,
//! and the tagline typing effect. Markup and styling belong to the host page;
//! this crate only queries the elements and class names it expects to find.
//!
//! All behavior is written against the [`dom::Dom`] trait so it can be tested
//! natively. The `browser` feature adds the [`web`] shell that binds it to a
//! real document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Top-level [`controller::PageController`] and event entry points |
//! | [`theme`] | Dark/light theme resolution, application, and persistence |
//! | [`search`] | Search queries, the simulated provider, and result rendering |
//! | [`reveal`] | Fade-in of result cards as they scroll into view |
//! | [`typewriter`] | Per-character tagline reveal schedule |
//! | [`dom`] | DOM, storage, and notice abstractions |
//! | [`config`] | Selectors, class names, and timings for the host page |
//! | [`consts`] | Shared constants (storage key, delays, thresholds) |
//! | [`error`] | Crate error type |
//! | `web` | `wasm-bindgen` shell (feature `browser`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod reveal;
pub mod search;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
mod test_support;
