//! Iris Landing - Leptos landing panel for the Iris Predictor app
//!
//! A WebAssembly panel embedded by the host data app in an iframe. It
//! renders the props the host sends, reports its height so the host can
//! size the frame, and returns `true` once the call-to-action is clicked.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host app (iframe parent)                                    │
//! └───────────────▲───────────────────────────┬─────────────────┘
//!      height, value                      render event
//! ┌───────────────┴───────────────────────────▼─────────────────┐
//! │  PostMessageBridge            listen_for_render              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LandingPanel (config + InteractionState)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Landing                                                     │
//! │  ├── Nav (studio)                                            │
//! │  ├── HeroCard (props, call-to-action, metrics)               │
//! │  ├── StudioVisual (studio)                                   │
//! │  └── Timeline (studio)                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Configuration, interaction state, errors
//! - [`copy`] - Fixed copy per locale
//! - [`bridge`] - Host wire protocol
//! - [`panel`] - Panel lifecycle and render model
//! - [`components`] - UI components
//! - [`services`] - Browser side of the host connection

use leptos::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod bridge;
pub mod components;
pub mod config;
pub mod copy;
pub mod panel;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Configuration
    Locale, Metric, PanelConfiguration,
    // Interaction
    InteractionState, Phase,
    // Host
    LandingArgs,
    // Errors
    BridgeError, BridgeResult, ConfigError,
};

// Protocol
pub use bridge::{HostBridge, OutboundMessage, RenderEvent, Theme};

// Panel
pub use panel::{LandingPanel, PanelView, RenderSurface};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Set up logging and mount the panel.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Iris Landing - Starting Leptos panel");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <Landing options=PanelOptions::default()/>
        </main>
    }
}
