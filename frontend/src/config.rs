//! Application configuration.
//!
//! Centralized compile-time configuration for the landing panel.
//! Nothing here is host-driven: the host only controls the props
//! described in [`crate::types::PanelConfiguration`].

use crate::types::Locale;

/// Component name the host declares the panel under.
pub const COMPONENT_NAME: &str = "iris_landing";

/// Version of the host component protocol we speak.
///
/// Sent with the `componentReady` handshake.
pub const API_VERSION: u32 = 1;

/// Target origin for `postMessage` calls to the host frame.
pub const TARGET_ORIGIN: &str = "*";

/// Locale of the fixed default copy.
///
/// English unless the crate is built with the `french` feature.
pub const DEFAULT_LOCALE: Locale = if cfg!(feature = "french") {
    Locale::Fr
} else {
    Locale::En
};

/// Render the navigation bar, visual card and workflow timeline
/// around the main card.
pub const SHOW_STUDIO_SECTIONS: bool = true;

/// Presentation options chosen by the embedding app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelOptions {
    /// Locale of the default copy and decorative text.
    pub locale: Locale,
    /// Whether the decorative studio sections are rendered.
    pub studio_sections: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            studio_sections: SHOW_STUDIO_SECTIONS,
        }
    }
}
