//! Host connection over `window.postMessage`.
//!
//! The host page embeds the panel in an iframe: props arrive as
//! `message` events on our window, reports go to `window.parent`.

use std::cell::Cell;

use leptos::{SignalSet, WriteSignal};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use crate::bridge::{FrameHeight, HostBridge, OutboundMessage, RenderEvent};
use crate::panel::{PanelView, RenderSurface};
use crate::types::{BridgeError, BridgeResult};
use crate::{API_VERSION, COMPONENT_NAME, TARGET_ORIGIN};

fn js_error(value: JsValue) -> BridgeError {
    BridgeError::Js(format!("{:?}", value))
}

/// Post one protocol message to the parent frame.
fn post_to_parent(message: &OutboundMessage) -> BridgeResult<()> {
    let wire = message.to_wire()?;
    // Plain objects, not JS `Map`s, so the host can read the fields.
    let data = wire
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| BridgeError::Js(e.to_string()))?;

    let parent = gloo_utils::window()
        .parent()
        .map_err(js_error)?
        .ok_or_else(|| BridgeError::Js("panel is not embedded in a frame".to_string()))?;

    parent.post_message(&data, TARGET_ORIGIN).map_err(js_error)
}

/// [`HostBridge`] talking to the host frame.
///
/// Frame heights equal to the last one delivered are not posted again.
pub struct PostMessageBridge {
    frame: Cell<FrameHeight>,
}

impl PostMessageBridge {
    /// Announce the panel to the host.
    pub fn connect() -> Self {
        let bridge = Self {
            frame: Cell::new(FrameHeight::default()),
        };
        bridge.post(&OutboundMessage::ComponentReady {
            api_version: API_VERSION,
        });
        log::info!("🔌 {} ready (protocol v{})", COMPONENT_NAME, API_VERSION);
        bridge
    }

    fn post(&self, message: &OutboundMessage) -> bool {
        match post_to_parent(message) {
            Ok(()) => true,
            Err(e) => {
                log::error!("❌ Failed to reach host: {}", e);
                false
            }
        }
    }
}

impl HostBridge for PostMessageBridge {
    fn report_height(&self, pixels: f64) {
        let mut frame = self.frame.get();
        if !frame.needs_report(pixels) {
            return;
        }
        if self.post(&OutboundMessage::SetFrameHeight { height: pixels }) {
            frame.sent(pixels);
            self.frame.set(frame);
        }
    }

    fn report_value(&self, value: bool) {
        self.post(&OutboundMessage::component_value(value));
    }
}

/// Start listening for render events from the host.
///
/// Should be called ONCE per panel; the listener lives as long as the page.
pub fn listen_for_render(on_render: impl Fn(RenderEvent) + 'static) -> BridgeResult<()> {
    let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
        let data: Value = match serde_wasm_bindgen::from_value(event.data()) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("Ignoring non-JSON message: {}", e);
                return;
            }
        };

        match RenderEvent::from_wire(&data) {
            Ok(render) => on_render(render),
            Err(BridgeError::UnexpectedType(kind)) => {
                log::debug!("Ignoring host message of type {}", kind);
            }
            Err(e) => log::warn!("⚠️  Dropping render event: {}", e),
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    gloo_utils::window()
        .add_event_listener_with_callback("message", onmessage.as_ref().unchecked_ref())
        .map_err(js_error)?;
    onmessage.forget();

    log::info!("📡 Listening for host render events");
    Ok(())
}

/// [`RenderSurface`] backed by a Leptos signal.
///
/// Setting the signal patches the DOM synchronously, so the body can be
/// measured right after.
pub struct DomSurface {
    set_view: WriteSignal<PanelView>,
}

impl DomSurface {
    pub fn new(set_view: WriteSignal<PanelView>) -> Self {
        Self { set_view }
    }
}

impl RenderSurface for DomSurface {
    fn render(&self, view: &PanelView) {
        self.set_view.set(view.clone());
    }

    fn height(&self) -> f64 {
        f64::from(gloo_utils::body().scroll_height())
    }
}
