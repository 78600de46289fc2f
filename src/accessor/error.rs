use crate::accessor::types::JsonType;
use thiserror::Error;

/// Key reported when the root value itself has the wrong shape
pub const ROOT_KEY: &str = "$";

/// Failure of a typed getter on [`Accessor`](crate::accessor::Accessor)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccessError {
    #[error("cant convert \"{key}\" to {expected}: found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: JsonType,
    },

    #[error("cant get \"{key}\" value: key not found")]
    KeyNotFound { key: String },

    #[error("parsing \"{value}\" for \"{key}\": not a float")]
    NotANumber { key: String, value: String },

    #[error("cant read \"{key}\" as a number: unsupported type {found}")]
    UnsupportedType { key: String, found: JsonType },

    #[error("array with name \"{key}\" is empty")]
    EmptyCollection { key: String },

    #[error("accessor used before initialize")]
    Uninitialized,
}

impl AccessError {
    pub fn type_mismatch(key: &str, expected: &'static str, found: JsonType) -> Self {
        AccessError::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        }
    }

    pub fn key_not_found(key: &str) -> Self {
        AccessError::KeyNotFound { key: key.to_string() }
    }

    pub fn not_a_number(key: &str, value: &str) -> Self {
        AccessError::NotANumber {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn unsupported_type(key: &str, found: JsonType) -> Self {
        AccessError::UnsupportedType {
            key: key.to_string(),
            found,
        }
    }

    pub fn empty_collection(key: &str) -> Self {
        AccessError::EmptyCollection { key: key.to_string() }
    }

    /// The key the failing getter was asked for, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            AccessError::TypeMismatch { key, .. }
            | AccessError::KeyNotFound { key }
            | AccessError::NotANumber { key, .. }
            | AccessError::UnsupportedType { key, .. }
            | AccessError::EmptyCollection { key } => Some(key),
            AccessError::Uninitialized => None,
        }
    }
}
