//! Run-scoped style options.
//!
//! Reads `strake.json` and provides the by-name lookup rule handlers use.
//! Falls back to defaults when the document is missing or unparseable, and
//! treats malformed option values as "rule disabled"; options can never
//! surface as errors to a rule handler.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A resolved option value as seen by rule handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// Whether this value enables the rule that reads it.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Str(s) => !s.is_empty(),
        }
    }
}

/// Quote-style enforcement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotemarkPolicy {
    /// No quote checking.
    #[default]
    Off,
    /// Every string literal must be single-quoted.
    Single,
    /// Every string literal must be double-quoted.
    Double,
    /// The first literal in the run sets the expected style.
    MatchFirst,
}

impl QuotemarkPolicy {
    /// Lenient conversion from a JSON option value.
    /// Anything unrecognized disables the check.
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(true) => QuotemarkPolicy::MatchFirst,
            serde_json::Value::String(s) if s == "single" => QuotemarkPolicy::Single,
            serde_json::Value::String(s) if s == "double" => QuotemarkPolicy::Double,
            _ => QuotemarkPolicy::Off,
        }
    }
}

impl Serialize for QuotemarkPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuotemarkPolicy::Off => serializer.serialize_bool(false),
            QuotemarkPolicy::Single => serializer.serialize_str("single"),
            QuotemarkPolicy::Double => serializer.serialize_str("double"),
            QuotemarkPolicy::MatchFirst => serializer.serialize_bool(true),
        }
    }
}

impl<'de> Deserialize<'de> for QuotemarkPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(QuotemarkPolicy::from_value(&value))
    }
}

/// Accept any JSON value for an on/off option: booleans pass through,
/// non-empty strings count as on, everything else counts as off.
fn truthy_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => !s.is_empty(),
        _ => false,
    })
}

/// The option set for one lint run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    #[serde(deserialize_with = "truthy_flag")]
    pub proto: bool,
    #[serde(deserialize_with = "truthy_flag")]
    pub iterator: bool,
    #[serde(deserialize_with = "truthy_flag")]
    pub nomen: bool,
    #[serde(deserialize_with = "truthy_flag")]
    pub node: bool,
    #[serde(deserialize_with = "truthy_flag")]
    pub camelcase: bool,
    pub quotmark: QuotemarkPolicy,
}

impl RuleOptions {
    /// Look up an option by name, the way rule handlers query it.
    /// Unknown names and the off quotmark state read as absent.
    pub fn get(&self, name: &str) -> Option<OptionValue> {
        match name {
            "proto" => Some(OptionValue::Bool(self.proto)),
            "iterator" => Some(OptionValue::Bool(self.iterator)),
            "nomen" => Some(OptionValue::Bool(self.nomen)),
            "node" => Some(OptionValue::Bool(self.node)),
            "camelcase" => Some(OptionValue::Bool(self.camelcase)),
            "quotmark" => match self.quotmark {
                QuotemarkPolicy::Off => None,
                QuotemarkPolicy::Single => Some(OptionValue::Str("single".to_string())),
                QuotemarkPolicy::Double => Some(OptionValue::Str("double".to_string())),
                QuotemarkPolicy::MatchFirst => Some(OptionValue::Bool(true)),
            },
            _ => None,
        }
    }

    /// Parse an options document. Strict about JSON syntax, lenient about
    /// values: an unrecognized value disables the rule it controls.
    pub fn from_json(content: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read an options document from a file.
    pub fn read(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load options from `strake.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join("strake.json");
        if !path.exists() {
            return Self::default();
        }
        match Self::read(&path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!(
                    "strake: warning: failed to parse {}: {}, using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

/// Errors from strict options-document parsing.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("Invalid options document: {0}")]
    Parse(String),

    #[error("Failed to read options file: {0}")]
    Io(String),
}

impl From<serde_json::Error> for OptionsError {
    fn from(e: serde_json::Error) -> Self {
        OptionsError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for OptionsError {
    fn from(e: std::io::Error) -> Self {
        OptionsError::Io(e.to_string())
    }
}
