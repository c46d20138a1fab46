/// Storage key holding the persisted dark mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Class added to the page body while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Id of the injected style element, used to keep injection idempotent.
pub const STYLE_ELEMENT_ID: &str = "theme-manager-styles";

/// Id of the toggle button the page may or may not render.
pub const TOGGLE_CONTROL_ID: &str = "darkModeToggle";

/// Dark mode rule block, scoped under the marker class.
pub const DARK_MODE_STYLESHEET: &str = include_str!("../assets/dark-mode.css");

/// Identifiers and style payload the controller operates with.
///
/// `Default` matches the page contract above; the fields exist so tests and
/// embedders can rebind the controller to other ids without forking it.
#[derive(Debug, Clone)]
pub struct ThemeOptions {
    pub storage_key: String,
    pub marker_class: String,
    pub style_element_id: String,
    pub toggle_control_id: String,
    pub stylesheet: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            storage_key: DARK_MODE_KEY.to_string(),
            marker_class: DARK_MODE_CLASS.to_string(),
            style_element_id: STYLE_ELEMENT_ID.to_string(),
            toggle_control_id: TOGGLE_CONTROL_ID.to_string(),
            stylesheet: DARK_MODE_STYLESHEET.to_string(),
        }
    }
}
