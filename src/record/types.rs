use serde::Serialize;
use serde_json::{Map, Value};

/// External name of the boolean field
pub const QOO_KEY: &str = "Qoo";

/// Top-level keys the extractor reads, in extraction order
pub const KNOWN_KEYS: [&str; 5] = ["foo", "bar", "baz", QOO_KEY, "foz"];

/// One element of `foz`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Text(String),
    /// Anything that is not a string, kept as decoded
    Opaque(Value),
}

impl Item {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Item::Text(s) => Some(s),
            Item::Opaque(_) => None,
        }
    }
}

impl From<&Value> for Item {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Item::Text(s.clone()),
            other => Item::Opaque(other.clone()),
        }
    }
}

/// The validated output of extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub foo: f64,

    pub bar: String,

    /// Russian telephone number, already checked against the pattern
    pub baz: String,

    #[serde(rename = "Qoo")]
    pub qoo: bool,

    /// Never empty on a record returned by the extractor
    pub foz: Vec<Item>,

    /// Top-level keys that are not one of [`KNOWN_KEYS`]
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// String elements of `foz`, skipping everything else
    pub fn foz_texts(&self) -> impl Iterator<Item = &str> {
        self.foz.iter().filter_map(Item::as_text)
    }
}

/// Configuration for the extraction process
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Keep unrecognized top-level keys in [`Record::extra`] instead of dropping them
    pub collect_unknown: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            collect_unknown: true,
        }
    }
}
