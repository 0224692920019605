//! Common types used across the landing panel.
//!
//! # Categories
//!
//! - **Locale** - Which fixed copy set is in use
//! - **Configuration Types** - Host props and their resolution
//! - **Interaction Types** - The acknowledgement flag
//! - **Host Types** - Typed arguments and value coercion for hosts
//! - **Error Types** - Configuration and wire errors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::copy::LocaleCopy;

// =============================================================================
// Locale
// =============================================================================

/// Language of the fixed copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// BCP 47 tag, also used for the `lang` attribute.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}

// =============================================================================
// Configuration Types
// =============================================================================

/// A metric chip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Caption under the value
    #[serde(default)]
    pub label: String,
    /// Headline value
    #[serde(default)]
    pub value: String,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Host props after default substitution.
///
/// Built once per render from the raw `args` map of a render event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelConfiguration {
    pub title: String,
    pub subtitle: String,
    pub highlight: String,
    pub bullets: Vec<String>,
    pub metrics: Vec<Metric>,
    pub cta_label: String,
}

impl PanelConfiguration {
    /// Resolve raw host props against the defaults of `locale`.
    ///
    /// Scalars fall back only when their key is absent. `bullets` and
    /// `metrics` fall back wholesale when absent, `null` or empty.
    pub fn resolve(args: &Map<String, Value>, locale: Locale) -> Self {
        let copy = LocaleCopy::for_locale(locale);
        Self {
            title: scalar(args, "title", copy.title),
            subtitle: scalar(args, "subtitle", copy.subtitle),
            highlight: scalar(args, "highlight", copy.highlight),
            bullets: bullets(args, copy),
            metrics: metrics(args, copy),
            cta_label: scalar(args, "ctaLabel", copy.cta_label),
        }
    }

    /// Configuration with every field at its default.
    pub fn defaults(locale: Locale) -> Self {
        Self::resolve(&Map::new(), locale)
    }
}

fn scalar(args: &Map<String, Value>, key: &str, default: &str) -> String {
    match args.get(key) {
        None => default.to_string(),
        Some(value) => display_text(value),
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn bullets(args: &Map<String, Value>, copy: &LocaleCopy) -> Vec<String> {
    match args.get("bullets") {
        Some(Value::Array(items)) if !items.is_empty() => items.iter().map(display_text).collect(),
        Some(Value::Array(_)) | Some(Value::Null) | None => default_bullets(copy),
        Some(other) => {
            log::warn!("bullets is not a list ({}), using defaults", other);
            default_bullets(copy)
        }
    }
}

fn default_bullets(copy: &LocaleCopy) -> Vec<String> {
    copy.bullets.iter().map(|b| b.to_string()).collect()
}

fn metrics(args: &Map<String, Value>, copy: &LocaleCopy) -> Vec<Metric> {
    match args.get("metrics") {
        Some(Value::Array(items)) if !items.is_empty() => {
            match items.iter().map(metric_from).collect::<Option<Vec<_>>>() {
                Some(metrics) => metrics,
                None => {
                    log::warn!("metrics contain a non-object entry, using defaults");
                    default_metrics(copy)
                }
            }
        }
        Some(Value::Array(_)) | Some(Value::Null) | None => default_metrics(copy),
        Some(other) => {
            log::warn!("metrics is not a list ({}), using defaults", other);
            default_metrics(copy)
        }
    }
}

/// `None` when `item` is not an object. Missing parts read as "".
fn metric_from(item: &Value) -> Option<Metric> {
    let object = item.as_object()?;
    let part = |key: &str| object.get(key).map(display_text).unwrap_or_default();
    Some(Metric {
        label: part("label"),
        value: part("value"),
    })
}

fn default_metrics(copy: &LocaleCopy) -> Vec<Metric> {
    copy.metrics
        .iter()
        .map(|m| Metric::new(m.label, m.value))
        .collect()
}

// =============================================================================
// Interaction Types
// =============================================================================

/// Where a panel instance is in its one-way lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unacknowledged,
    Acknowledged,
}

/// Acknowledgement flag owned by one panel instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub acknowledged: bool,
}

impl InteractionState {
    /// Mark the call-to-action as activated.
    ///
    /// Returns `true` only for the transition out of `Unacknowledged`.
    pub fn acknowledge(&mut self) -> bool {
        let first = !self.acknowledged;
        self.acknowledged = true;
        first
    }

    pub fn phase(&self) -> Phase {
        if self.acknowledged {
            Phase::Acknowledged
        } else {
            Phase::Unacknowledged
        }
    }
}

// =============================================================================
// Host Types
// =============================================================================

/// Typed props a host sends to the panel.
///
/// Unset fields are left out of the serialized map so the panel
/// substitutes its defaults for them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<Metric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
}

impl LandingArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlight = Some(highlight.into());
        self
    }

    pub fn bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = Some(bullets.into_iter().map(Into::into).collect());
        self
    }

    pub fn metrics(mut self, metrics: impl IntoIterator<Item = Metric>) -> Self {
        self.metrics = Some(metrics.into_iter().collect());
        self
    }

    pub fn cta_label(mut self, cta_label: impl Into<String>) -> Self {
        self.cta_label = Some(cta_label.into());
        self
    }

    /// The `args` map of a render event.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Host-side reading of the component value.
///
/// The panel only ever reports `true`; anything missing reads as `false`.
pub fn acknowledged_from_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Invalid compile-time or embedding configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

/// Errors on the host wire.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Message did not have the expected JSON shape.
    #[error("Failed to decode host message: {0}")]
    Decode(#[from] serde_json::Error),

    /// Message was well-formed but not one we handle.
    #[error("Unexpected host message type: {0}")]
    UnexpectedType(String),

    /// Converting to or from a JS value failed.
    #[error("JavaScript interop failed: {0}")]
    Js(String),
}

/// Result type alias for host wire operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_absent_fields_use_defaults() {
        let config = PanelConfiguration::resolve(&Map::new(), Locale::En);
        let copy = LocaleCopy::for_locale(Locale::En);

        assert_eq!(config.title, copy.title);
        assert_eq!(config.subtitle, copy.subtitle);
        assert_eq!(config.highlight, copy.highlight);
        assert_eq!(config.cta_label, copy.cta_label);
        assert_eq!(config.bullets, copy.bullets.to_vec());
        assert_eq!(config.metrics.len(), 3);
        assert_eq!(config.metrics[2], Metric::new("Prediction time", "< 10 ms"));
    }

    #[test]
    fn test_empty_string_is_kept() {
        let config = PanelConfiguration::resolve(
            &args(json!({ "title": "", "highlight": null })),
            Locale::En,
        );

        assert_eq!(config.title, "");
        assert_eq!(config.highlight, "");
        assert_eq!(config.subtitle, LocaleCopy::for_locale(Locale::En).subtitle);
    }

    #[test]
    fn test_empty_bullets_replaced_wholesale() {
        let config = PanelConfiguration::resolve(&args(json!({ "bullets": [] })), Locale::En);
        assert_eq!(config.bullets, LocaleCopy::for_locale(Locale::En).bullets.to_vec());

        let config = PanelConfiguration::resolve(&args(json!({ "bullets": null })), Locale::Fr);
        assert_eq!(config.bullets, LocaleCopy::for_locale(Locale::Fr).bullets.to_vec());
    }

    #[test]
    fn test_partial_bullets_kept_verbatim() {
        let config = PanelConfiguration::resolve(
            &args(json!({ "bullets": ["b", "a", "b"] })),
            Locale::En,
        );

        assert_eq!(config.bullets, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_metrics_keep_order_and_pairs() {
        let config = PanelConfiguration::resolve(
            &args(json!({
                "metrics": [
                    { "label": "Z", "value": "9" },
                    { "label": "A", "value": "1" }
                ]
            })),
            Locale::En,
        );

        assert_eq!(config.metrics, vec![Metric::new("Z", "9"), Metric::new("A", "1")]);
    }

    #[test]
    fn test_empty_metrics_use_defaults() {
        let config = PanelConfiguration::resolve(&args(json!({ "metrics": [] })), Locale::En);
        assert_eq!(config.metrics, PanelConfiguration::defaults(Locale::En).metrics);
    }

    #[test]
    fn test_metric_missing_part_is_empty() {
        let config = PanelConfiguration::resolve(
            &args(json!({ "metrics": [{ "label": "Only label" }] })),
            Locale::En,
        );

        assert_eq!(config.metrics, vec![Metric::new("Only label", "")]);
    }

    #[test]
    fn test_metric_non_string_parts_render_as_json() {
        let config = PanelConfiguration::resolve(
            &args(json!({
                "metrics": [
                    { "label": "Accuracy", "value": 0.97 },
                    { "label": null, "value": true }
                ]
            })),
            Locale::En,
        );

        assert_eq!(
            config.metrics,
            vec![Metric::new("Accuracy", "0.97"), Metric::new("", "true")]
        );
    }

    #[test]
    fn test_metrics_with_non_object_entry_use_defaults() {
        let config = PanelConfiguration::resolve(
            &args(json!({ "metrics": [{ "label": "A", "value": "1" }, "loose"] })),
            Locale::En,
        );

        assert_eq!(config.metrics, PanelConfiguration::defaults(Locale::En).metrics);
    }

    #[test]
    fn test_null_or_non_list_collections_use_defaults() {
        let defaults = PanelConfiguration::defaults(Locale::En);

        let config = PanelConfiguration::resolve(&args(json!({ "metrics": null })), Locale::En);
        assert_eq!(config.metrics, defaults.metrics);

        let config = PanelConfiguration::resolve(
            &args(json!({ "bullets": "one", "metrics": { "label": "A" } })),
            Locale::En,
        );
        assert_eq!(config.bullets, defaults.bullets);
        assert_eq!(config.metrics, defaults.metrics);
    }

    #[test]
    fn test_non_string_scalars_render_as_json() {
        let config = PanelConfiguration::resolve(
            &args(json!({ "title": 42, "ctaLabel": false, "subtitle": ["a"] })),
            Locale::En,
        );

        assert_eq!(config.title, "42");
        assert_eq!(config.cta_label, "false");
        assert_eq!(config.subtitle, r#"["a"]"#);
    }

    #[test]
    fn test_non_string_bullets_render_as_json() {
        let config = PanelConfiguration::resolve(
            &args(json!({ "bullets": ["first", 2, null, { "k": 1 }] })),
            Locale::En,
        );

        assert_eq!(config.bullets, vec!["first", "2", "", r#"{"k":1}"#]);
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
        assert!(matches!(
            "de".parse::<Locale>(),
            Err(ConfigError::UnknownLocale(tag)) if tag == "de"
        ));
    }

    #[test]
    fn test_acknowledge_is_one_way() {
        let mut state = InteractionState::default();
        assert_eq!(state.phase(), Phase::Unacknowledged);

        assert!(state.acknowledge());
        assert!(!state.acknowledge());
        assert_eq!(state.phase(), Phase::Acknowledged);
        assert!(state.acknowledged);
    }

    #[test]
    fn test_landing_args_omit_unset_fields() {
        let map = LandingArgs::new()
            .title("X")
            .cta_label("Go")
            .metrics([Metric::new("A", "1")])
            .to_map();

        assert_eq!(map.get("title"), Some(&json!("X")));
        assert_eq!(map.get("ctaLabel"), Some(&json!("Go")));
        assert_eq!(map.get("metrics"), Some(&json!([{ "label": "A", "value": "1" }])));
        assert!(!map.contains_key("subtitle"));
        assert!(!map.contains_key("bullets"));
    }

    #[test]
    fn test_component_value_coercion() {
        assert!(!acknowledged_from_value(None));
        assert!(!acknowledged_from_value(Some(&Value::Null)));
        assert!(acknowledged_from_value(Some(&json!(true))));
        assert!(!acknowledged_from_value(Some(&json!(false))));
        assert!(!acknowledged_from_value(Some(&json!(0))));
        assert!(acknowledged_from_value(Some(&json!("yes"))));
    }
}
