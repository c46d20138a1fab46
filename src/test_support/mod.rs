//! In-memory stand-ins for the browser ports. Clones share state, the same
//! way every production port clone views the one real page.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::ports::{DomPort, PreferenceStore};

/// `PreferenceStore` over a plain map of raw strings, so tests can assert
/// the exact serialized form a real localStorage would hold.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// The raw stored string, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .borrow()
            .get(key)
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(default)
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Default)]
struct FakeDomInner {
    root_classes: BTreeSet<String>,
    // id -> inner content, for elements the simulated page contains
    elements: BTreeMap<String, String>,
    // (id, css) per injected style node, in insertion order
    styles: Vec<(String, String)>,
    click_handlers: BTreeMap<String, Vec<Rc<dyn Fn()>>>,
}

/// `DomPort` over a simulated page. Elements exist only when a test added
/// them with [`FakeDom::with_element`].
#[derive(Clone, Default)]
pub struct FakeDom {
    inner: Rc<RefCell<FakeDomInner>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty element with the given id to the simulated page.
    pub fn with_element(self, id: &str) -> Self {
        self.inner
            .borrow_mut()
            .elements
            .insert(id.to_string(), String::new());
        self
    }

    pub fn content(&self, id: &str) -> Option<String> {
        self.inner.borrow().elements.get(id).cloned()
    }

    pub fn style_count(&self) -> usize {
        self.inner.borrow().styles.len()
    }

    /// Fires every click handler registered on the element. Handlers run
    /// outside the borrow so they may call back into the fake.
    pub fn click(&self, id: &str) {
        let handlers: Vec<Rc<dyn Fn()>> = self
            .inner
            .borrow()
            .click_handlers
            .get(id)
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            handler();
        }
    }
}

impl DomPort for FakeDom {
    fn root_has_class(&self, class: &str) -> bool {
        self.inner.borrow().root_classes.contains(class)
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let mut inner = self.inner.borrow_mut();
        if present {
            inner.root_classes.insert(class.to_string());
        } else {
            inner.root_classes.remove(class);
        }
    }

    fn set_content(&self, id: &str, html: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.elements.get_mut(id) {
            Some(content) => {
                *content = html.to_string();
                true
            }
            None => false,
        }
    }

    fn insert_style_once(&self, id: &str, css: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.styles.iter().any(|(existing, _)| existing == id) {
            return false;
        }
        inner.styles.push((id.to_string(), css.to_string()));
        true
    }

    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.elements.contains_key(id) {
            return false;
        }
        inner
            .click_handlers
            .entry(id.to_string())
            .or_default()
            .push(Rc::from(handler));
        true
    }
}
