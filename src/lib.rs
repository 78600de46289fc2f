//! # json-record - typed extraction from loosely shaped JSON
//!
//! Decodes a JSON document and pulls a fixed set of fields out of it into a
//! strongly typed [`Record`], validating as it goes.
//!
//! ## Modules
//!
//! - **accessor**: typed, fallible getters over a decoded JSON object
//! - **record**: the fixed-shape [`Record`] and the extractor that fills it
//! - **decode**: raw bytes to `serde_json::Value`
//!
//! ## Quick Start
//!
//! ```rust
//! use json_record::{read_record, ExtractConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = br#"{"foo": "1.5", "bar": "x", "baz": "+7 (914) 666-13-37", "Qoo": true, "foz": ["a"], "note": 1}"#;
//!
//! let record = read_record(input, ExtractConfig::default())?;
//! assert_eq!(record.foo, 1.5);
//! assert!(record.qoo);
//!
//! // keys outside the record shape are kept aside
//! assert!(record.extra.contains_key("note"));
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};

pub mod accessor;
pub mod decode;
pub mod record;

// Re-export commonly used types for convenience
pub use accessor::{AccessError, Accessor, JsonType};
pub use decode::{decode_json, DecodeError};
pub use record::{ExtractConfig, ExtractError, Item, Record, RecordExtractor};

/// Main entry point: decode JSON bytes and extract a validated record
///
/// The typed cause is reachable through `downcast_ref::<ExtractError>()`
/// or `downcast_ref::<DecodeError>()` on the returned error.
pub fn read_record(data: &[u8], config: ExtractConfig) -> Result<Record> {
    let value = decode_json(data).context("Failed to parse JSON")?;

    let extractor = RecordExtractor::new(config);
    let record = extractor
        .extract(&value)
        .context("Failed to extract record")?;

    Ok(record)
}
