//! Abstractions over the browser surfaces the controller touches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page behavior is written against these traits so it runs natively under
//! `cargo test`. The `web` module implements them over `web-sys`; tests use
//! an in-memory document.
//!
//! Node handles are cheap clones, and equality means "same element". Every
//! method takes `&self`, matching the DOM's shared-reference model.

use crate::error::PageError;

/// Minimal document interface.
pub trait Dom {
    type Node: Clone + PartialEq;

    /// First element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// The document `<body>`.
    fn body(&self) -> Option<Self::Node>;

    fn create_element(&self, tag: &str) -> Result<Self::Node, PageError>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), PageError>;

    fn child_count(&self, node: &Self::Node) -> usize;

    fn text_content(&self, node: &Self::Node) -> String;

    /// Replace all children with a single text node.
    fn set_text_content(&self, node: &Self::Node, text: &str);

    /// Replace all children by parsing `html`. Callers pass trusted markup.
    fn set_inner_html(&self, node: &Self::Node, html: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Add a class. Adding a class already present is a no-op.
    fn add_class(&self, node: &Self::Node, class: &str) -> Result<(), PageError>;

    fn remove_class(&self, node: &Self::Node, class: &str) -> Result<(), PageError>;

    /// Overwrite the whole `class` attribute.
    fn set_class_name(&self, node: &Self::Node, class_name: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), PageError>;

    /// Set an inline style property. Non-HTML elements are left unchanged.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), PageError>;

    /// Set the `checked` state of a checkbox. Other elements are left unchanged.
    fn set_checked(&self, node: &Self::Node, checked: bool);
}

/// String key/value persistence (browser `localStorage`).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Blocking acknowledgment shown to the user.
pub trait Notifier {
    fn notice(&self, message: &str);
}
