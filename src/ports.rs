//! Injected seams between the controller and the browser.
//!
//! Both ports are infallible by contract: a missing element, a missing
//! storage entry, or an already-inserted style block is an expected state,
//! not an error, and each operation degrades to a no-op or a default.

/// Persisted key-value preference storage (localStorage in production).
///
/// Boolean serialization lives entirely behind this trait so callers never
/// compare raw strings.
pub trait PreferenceStore {
    /// Reads a boolean preference. A missing entry or a value that does not
    /// parse as a boolean yields `default`.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Writes a boolean preference, serialized as `"true"` / `"false"`.
    fn set_bool(&self, key: &str, value: bool);
}

/// The narrow slice of the document the controller is allowed to touch.
pub trait DomPort {
    /// Whether the marker class is currently present on the root element.
    fn root_has_class(&self, class: &str) -> bool;

    /// Adds or removes the marker class on the root element.
    fn set_root_class(&self, class: &str, present: bool);

    /// Replaces the inner content of the element with the given id.
    /// Returns `false` (touching nothing) when the element does not exist.
    fn set_content(&self, id: &str, html: &str) -> bool;

    /// Inserts a style node holding `css` under the given id, at most once.
    /// Returns `false` when a node with that id already exists.
    fn insert_style_once(&self, id: &str, css: &str) -> bool;

    /// Subscribes `handler` to click events on the element with the given
    /// id. Returns `false` (registering nothing) when the element does not
    /// exist.
    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> bool;
}
