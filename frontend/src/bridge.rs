//! Host component protocol.
//!
//! The panel runs in an iframe owned by the host app. The host posts
//! `streamlit:render` events carrying the props; the panel posts back a
//! ready handshake, its frame height and its component value. Every
//! outbound message carries `"isStreamlitMessage": true`.
//!
//! ```text
//! host ──── {type: "streamlit:render", args, theme} ────▶ panel
//! host ◀─── {type: "streamlit:componentReady", apiVersion} ── panel
//! host ◀─── {type: "streamlit:setFrameHeight", height} ────── panel
//! host ◀─── {type: "streamlit:setComponentValue", value} ──── panel
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{BridgeError, BridgeResult};

/// `type` of the inbound render event.
pub const RENDER_EVENT: &str = "streamlit:render";

/// Outbound side of the host connection.
///
/// Injected into [`crate::panel::LandingPanel`] so tests can record
/// what the panel reports.
pub trait HostBridge {
    /// Tell the host how tall the panel currently is, in pixels.
    fn report_height(&self, pixels: f64);

    /// Hand the component value back to the host.
    fn report_value(&self, value: bool);
}

// =============================================================================
// Outbound
// =============================================================================

/// Encoding of a component value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Json,
}

/// Messages the panel posts to the host frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    #[serde(rename = "streamlit:componentReady", rename_all = "camelCase")]
    ComponentReady { api_version: u32 },

    #[serde(rename = "streamlit:setFrameHeight")]
    SetFrameHeight { height: f64 },

    #[serde(rename = "streamlit:setComponentValue", rename_all = "camelCase")]
    SetComponentValue { value: Value, data_type: DataType },
}

impl OutboundMessage {
    pub fn component_value(value: bool) -> Self {
        OutboundMessage::SetComponentValue {
            value: Value::Bool(value),
            data_type: DataType::Json,
        }
    }

    /// JSON object as posted to the host, with the protocol marker.
    pub fn to_wire(&self) -> BridgeResult<Value> {
        let mut wire = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut wire {
            map.insert("isStreamlitMessage".to_string(), Value::Bool(true));
        }
        Ok(wire)
    }
}

/// Last frame height the host actually received.
///
/// A height is recorded only once it was posted, so a failed post is
/// retried on the next report of the same height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameHeight {
    last_sent: Option<f64>,
}

impl FrameHeight {
    pub fn needs_report(&self, pixels: f64) -> bool {
        self.last_sent != Some(pixels)
    }

    pub fn sent(&mut self, pixels: f64) {
        self.last_sent = Some(pixels);
    }
}

// =============================================================================
// Inbound
// =============================================================================

/// Host theme forwarded with each render event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// "light" or "dark"
    pub base: Option<String>,
    pub primary_color: Option<String>,
    pub background_color: Option<String>,
    pub secondary_background_color: Option<String>,
    pub text_color: Option<String>,
    pub font: Option<String>,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.base.as_deref() == Some("dark")
    }

    /// Inline `style` declaring the theme as CSS custom properties.
    ///
    /// Only fields the host sent are declared.
    pub fn css_variables(&self) -> String {
        [
            ("--primary-color", &self.primary_color),
            ("--background-color", &self.background_color),
            ("--secondary-background-color", &self.secondary_background_color),
            ("--text-color", &self.text_color),
            ("--font", &self.font),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{}: {};", name, v)))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// A `streamlit:render` event.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RenderEvent {
    /// Raw props; see [`crate::types::PanelConfiguration::resolve`]
    #[serde(default)]
    pub args: Map<String, Value>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl RenderEvent {
    pub fn new(args: Map<String, Value>) -> Self {
        Self { args, theme: None }
    }

    /// Decode the data of a window `message` event.
    ///
    /// Anything that is not a render event is an
    /// [`BridgeError::UnexpectedType`].
    pub fn from_wire(data: &Value) -> BridgeResult<Self> {
        match data.get("type").and_then(Value::as_str) {
            Some(RENDER_EVENT) => Ok(RenderEvent::deserialize(data)?),
            Some(other) => Err(BridgeError::UnexpectedType(other.to_string())),
            None => Err(BridgeError::UnexpectedType("<untyped>".to_string())),
        }
    }
}
