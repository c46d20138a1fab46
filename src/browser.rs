//! Production port implementations over the real browser.
//!
//! Every lookup here is optional: no window, no document, no body, no
//! element with the expected id are all ordinary states that degrade to a
//! default or a skipped write.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage};

use crate::ports::{DomPort, PreferenceStore};

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn body() -> Option<HtmlElement> {
    document().and_then(|document| document.body())
}

fn element(id: &str) -> Option<Element> {
    document().and_then(|document| document.get_element_by_id(id))
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Runs `f` once the document is ready, immediately if it already is.
pub fn run_when_ready<F: FnOnce() + 'static>(f: F) {
    let document = match document() {
        Some(document) => document,
        None => return,
    };

    if document.ready_state() == "loading" {
        let closure = Closure::once(move |_: web_sys::Event| f());
        if document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            closure.forget();
        }
    } else {
        f();
    }
}

/// `PreferenceStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl PreferenceStore for LocalStorage {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        local_storage()
            .and_then(|storage| storage.get_item(key).ok().flatten())
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(default)
    }

    fn set_bool(&self, key: &str, value: bool) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, &value.to_string()).is_err() {
                    debug!("localStorage write for {} failed", key);
                }
            }
            None => debug!("localStorage unavailable, {} not persisted", key),
        }
    }
}

/// `DomPort` over the live document. The page body is the root element
/// carrying the marker class.
#[derive(Clone, Copy, Default)]
pub struct BrowserDom;

impl BrowserDom {
    pub fn new() -> Self {
        Self
    }
}

impl DomPort for BrowserDom {
    fn root_has_class(&self, class: &str) -> bool {
        body()
            .map(|body| body.class_list().contains(class))
            .unwrap_or(false)
    }

    fn set_root_class(&self, class: &str, present: bool) {
        if let Some(body) = body() {
            let list = body.class_list();
            let result = if present {
                list.add_1(class)
            } else {
                list.remove_1(class)
            };
            if result.is_err() {
                debug!("could not update class {} on body", class);
            }
        }
    }

    fn set_content(&self, id: &str, html: &str) -> bool {
        match element(id) {
            Some(element) => {
                element.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn insert_style_once(&self, id: &str, css: &str) -> bool {
        let document = match document() {
            Some(document) => document,
            None => return false,
        };
        if document.get_element_by_id(id).is_some() {
            return false;
        }

        let style = match document.create_element("style") {
            Ok(style) => style,
            Err(_) => return false,
        };
        style.set_id(id);
        style.set_text_content(Some(css));

        match document.head() {
            Some(head) => head.append_child(&style).is_ok(),
            None => false,
        }
    }

    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> bool {
        let target = match element(id) {
            Some(target) => target,
            None => return false,
        };

        let closure = Closure::wrap(
            Box::new(move |_: web_sys::Event| handler()) as Box<dyn FnMut(web_sys::Event)>
        );
        let attached = target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_ok();
        if attached {
            closure.forget();
        }
        attached
    }
}
