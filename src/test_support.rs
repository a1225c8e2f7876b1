//! In-memory document, store, and notifier for native tests.
//!
//! Selector support covers what the page config uses: `#id`, `.class`, and
//! bare tag names. `set_inner_html` records the markup verbatim instead of
//! parsing it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::{Dom, KeyValueStore, Notifier};
use crate::error::PageError;

#[derive(Default)]
pub struct NodeData {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub inner_html: String,
    pub children: Vec<FakeNode>,
    pub style: Vec<(String, String)>,
    pub checked: bool,
}

#[derive(Clone)]
pub struct FakeNode(Rc<RefCell<NodeData>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FakeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        write!(f, "<{} class={:?}>", data.tag, data.classes)
    }
}

impl FakeNode {
    fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData { tag: tag.to_owned(), ..NodeData::default() })))
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().style.iter().find(|(k, _)| k == property).map(|(_, v)| v.clone())
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn children(&self) -> Vec<FakeNode> {
        self.0.borrow().children.clone()
    }

    pub fn checked(&self) -> bool {
        self.0.borrow().checked
    }

    fn text(&self) -> String {
        let data = self.0.borrow();
        if data.children.is_empty() {
            data.text.clone()
        } else {
            data.children.iter().map(FakeNode::text).collect()
        }
    }

    fn matches(&self, selector: &str) -> bool {
        let data = self.0.borrow();
        if let Some(id) = selector.strip_prefix('#') {
            data.attrs.iter().any(|(k, v)| k == "id" && v == id)
        } else if let Some(class) = selector.strip_prefix('.') {
            data.classes.iter().any(|c| c == class)
        } else {
            data.tag == selector
        }
    }

    fn collect(&self, selector: &str, out: &mut Vec<FakeNode>) {
        for child in self.0.borrow().children.iter() {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }
}

/// Document tree rooted at `<html>` with a `<body>`.
pub struct FakeDom {
    root: FakeNode,
    body: FakeNode,
    /// Fallible mutations still allowed before every one is rejected.
    mutations_left: Cell<Option<usize>>,
}

impl FakeDom {
    pub fn new() -> Self {
        let root = FakeNode::new("html");
        let body = FakeNode::new("body");
        root.0.borrow_mut().children.push(body.clone());
        Self { root, body, mutations_left: Cell::new(None) }
    }

    pub fn body_node(&self) -> FakeNode {
        self.body.clone()
    }

    /// Append a new element under `parent` with optional id and classes.
    pub fn add(&self, parent: &FakeNode, tag: &str, id: Option<&str>, classes: &[&str]) -> FakeNode {
        let node = FakeNode::new(tag);
        {
            let mut data = node.0.borrow_mut();
            if let Some(id) = id {
                data.attrs.push(("id".into(), id.into()));
            }
            data.classes = classes.iter().map(|c| (*c).to_owned()).collect();
        }
        parent.0.borrow_mut().children.push(node.clone());
        node
    }

    pub fn add_text(&self, node: &FakeNode, text: &str) {
        node.0.borrow_mut().text = text.to_owned();
    }

    pub fn add_attr(&self, node: &FakeNode, name: &str, value: &str) {
        node.0.borrow_mut().attrs.push((name.into(), value.into()));
    }

    /// Make every fallible mutation return `PageError::Dom`.
    pub fn fail_mutations(&self) {
        self.fail_mutations_after(0);
    }

    /// Allow `count` more fallible mutations, then reject the rest.
    pub fn fail_mutations_after(&self, count: usize) {
        self.mutations_left.set(Some(count));
    }

    fn check(&self) -> Result<(), PageError> {
        match self.mutations_left.get() {
            None => Ok(()),
            Some(0) => Err(PageError::Dom("rejected".into())),
            Some(left) => {
                self.mutations_left.set(Some(left - 1));
                Ok(())
            }
        }
    }
}

impl Dom for FakeDom {
    type Node = FakeNode;

    fn query(&self, selector: &str) -> Option<FakeNode> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeNode> {
        let mut out = Vec::new();
        self.root.collect(selector, &mut out);
        out
    }

    fn query_within(&self, scope: &FakeNode, selector: &str) -> Option<FakeNode> {
        let mut out = Vec::new();
        scope.collect(selector, &mut out);
        out.into_iter().next()
    }

    fn body(&self) -> Option<FakeNode> {
        Some(self.body.clone())
    }

    fn create_element(&self, tag: &str) -> Result<FakeNode, PageError> {
        self.check()?;
        Ok(FakeNode::new(tag))
    }

    fn append_child(&self, parent: &FakeNode, child: &FakeNode) -> Result<(), PageError> {
        self.check()?;
        parent.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn child_count(&self, node: &FakeNode) -> usize {
        node.0.borrow().children.len()
    }

    fn text_content(&self, node: &FakeNode) -> String {
        node.text()
    }

    fn set_text_content(&self, node: &FakeNode, text: &str) {
        let mut data = node.0.borrow_mut();
        data.children.clear();
        data.inner_html.clear();
        data.text = text.to_owned();
    }

    fn set_inner_html(&self, node: &FakeNode, html: &str) {
        let mut data = node.0.borrow_mut();
        data.children.clear();
        data.text.clear();
        data.inner_html = html.to_owned();
    }

    fn has_class(&self, node: &FakeNode, class: &str) -> bool {
        node.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &FakeNode, class: &str) -> Result<(), PageError> {
        self.check()?;
        let mut data = node.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, node: &FakeNode, class: &str) -> Result<(), PageError> {
        self.check()?;
        node.0.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn set_class_name(&self, node: &FakeNode, class_name: &str) {
        node.0.borrow_mut().classes = class_name.split_whitespace().map(str::to_owned).collect();
    }

    fn attribute(&self, node: &FakeNode, name: &str) -> Option<String> {
        node.attr(name)
    }

    fn set_attribute(&self, node: &FakeNode, name: &str, value: &str) -> Result<(), PageError> {
        self.check()?;
        let mut data = node.0.borrow_mut();
        data.attrs.retain(|(k, _)| k != name);
        data.attrs.push((name.to_owned(), value.to_owned()));
        Ok(())
    }

    fn set_style(&self, node: &FakeNode, property: &str, value: &str) -> Result<(), PageError> {
        self.check()?;
        let mut data = node.0.borrow_mut();
        data.style.retain(|(k, _)| k != property);
        data.style.push((property.to_owned(), value.to_owned()));
        Ok(())
    }

    fn set_checked(&self, node: &FakeNode, checked: bool) {
        node.0.borrow_mut().checked = checked;
    }
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// A store whose writes always fail.
    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.fail_writes {
            return Err(PageError::Storage("quota exceeded".into()));
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notice(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}
