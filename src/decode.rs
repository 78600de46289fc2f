//! Raw bytes to a decoded JSON value

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] simd_json::Error),
}

/// Decode UTF-8 JSON text into a [`Value`]
///
/// simd-json parses in place, so the input is copied into a scratch buffer
/// and the caller's bytes stay untouched. Integers outside the i64/u64 range
/// decode as floats.
pub fn decode_json(data: &[u8]) -> Result<Value, DecodeError> {
    let mut buffer = data.to_vec();
    let value = simd_json::serde::from_slice::<Value>(&mut buffer)?;
    Ok(value)
}
