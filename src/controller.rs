use log::debug;

use crate::config::ThemeOptions;
use crate::ports::{DomPort, PreferenceStore};

/// Markup shown on the toggle while dark mode is active ("switch to light").
pub const SUN_ICON: &str = r#"<i class="fas fa-sun"></i>"#;
/// Markup shown on the toggle while light mode is active ("switch to dark").
pub const MOON_ICON: &str = r#"<i class="fas fa-moon"></i>"#;

/// Visual state of the page, derived from the marker class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Drives the page's dark/light presentation through injected ports.
///
/// One controller is constructed per page session. Clones share the same
/// underlying ports, so the click handler holds a clone of the controller
/// that built it.
#[derive(Clone)]
pub struct ThemeController<S, D> {
    store: S,
    dom: D,
    options: ThemeOptions,
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore + Clone + 'static,
    D: DomPort + Clone + 'static,
{
    pub fn new(store: S, dom: D) -> Self {
        Self::with_options(store, dom, ThemeOptions::default())
    }

    pub fn with_options(store: S, dom: D, options: ThemeOptions) -> Self {
        Self {
            store,
            dom,
            options,
        }
    }

    /// Applies the persisted preference, injects the stylesheet (at most
    /// once), and wires up the toggle control when the page has one.
    ///
    /// Safe to call again: the style block is keyed by id and re-applying
    /// the stored preference is idempotent.
    pub fn initialize(&self) {
        if self.store.get_bool(&self.options.storage_key, false) {
            self.dom.set_root_class(&self.options.marker_class, true);
        }

        self.dom
            .insert_style_once(&self.options.style_element_id, &self.options.stylesheet);

        let this = self.clone();
        let attached = self
            .dom
            .on_click(&self.options.toggle_control_id, Box::new(move || this.toggle()));
        if attached {
            self.update_icon();
        } else {
            debug!(
                "toggle control #{} not in page, toggle unavailable",
                self.options.toggle_control_id
            );
        }
    }

    /// Flips the theme, persists the resulting state, and refreshes the
    /// toggle icon.
    pub fn toggle(&self) {
        let dark = !self.dom.root_has_class(&self.options.marker_class);
        self.dom.set_root_class(&self.options.marker_class, dark);

        // Persist what the page actually shows, not what we asked for.
        let enabled = self.is_enabled();
        self.store.set_bool(&self.options.storage_key, enabled);
        debug!("theme toggled, dark mode {}", enabled);

        self.update_icon();
    }

    /// Forces dark mode on. Idempotent.
    pub fn enable(&self) {
        self.force(true);
    }

    /// Forces light mode. Idempotent.
    pub fn disable(&self) {
        self.force(false);
    }

    fn force(&self, enabled: bool) {
        self.dom.set_root_class(&self.options.marker_class, enabled);
        self.store.set_bool(&self.options.storage_key, enabled);
        self.update_icon();
    }

    /// Whether the marker class is currently on the root element. Reads the
    /// page only, never storage.
    pub fn is_enabled(&self) -> bool {
        self.dom.root_has_class(&self.options.marker_class)
    }

    pub fn current(&self) -> Theme {
        if self.is_enabled() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Points the toggle icon at the state a click would switch to. No-op
    /// when the control is absent.
    pub fn update_icon(&self) {
        let icon = if self.is_enabled() { SUN_ICON } else { MOON_ICON };
        self.dom.set_content(&self.options.toggle_control_id, icon);
    }
}
