//! Fixed-shape record extraction
//!
//! Reads the known fields out of a decoded JSON object into a [`Record`],
//! validating each one and stopping at the first failure.

pub mod error;
pub mod extractor;
pub mod phone;
pub mod types;

pub use error::ExtractError;
pub use extractor::RecordExtractor;
pub use phone::{is_russian_phone, RUSSIAN_PHONE_PATTERN};
pub use types::{ExtractConfig, Item, Record, KNOWN_KEYS, QOO_KEY};
