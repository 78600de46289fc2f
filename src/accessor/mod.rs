//! Typed access into a decoded JSON object
//!
//! An [`Accessor`] borrows a decoded value, checks once that it is an object,
//! and then hands out typed, fallible views of its keys.

pub mod error;
pub mod types;

pub use error::{AccessError, ROOT_KEY};
pub use types::JsonType;

use serde_json::{Map, Value};

/// Read-only typed view over a decoded JSON object
#[derive(Debug, Clone)]
pub struct Accessor<'a> {
    decoded: &'a Value,
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Accessor<'a> {
    /// Wrap a decoded value without checking its shape yet
    pub fn new(decoded: &'a Value) -> Self {
        Accessor { decoded, map: None }
    }

    /// Wrap and initialize in one step
    pub fn from_value(decoded: &'a Value) -> Result<Self, AccessError> {
        let mut accessor = Self::new(decoded);
        accessor.initialize()?;
        Ok(accessor)
    }

    /// Coerce the wrapped value into object form
    ///
    /// Must succeed before any getter is used. Calling it again after a
    /// success does nothing.
    pub fn initialize(&mut self) -> Result<(), AccessError> {
        if self.map.is_some() {
            return Ok(());
        }

        match self.decoded {
            Value::Object(map) => {
                self.map = Some(map);
                Ok(())
            }
            other => Err(AccessError::type_mismatch(
                ROOT_KEY,
                "object",
                JsonType::from_value(other),
            )),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.map.is_some()
    }

    fn map(&self) -> Result<&'a Map<String, Value>, AccessError> {
        self.map.ok_or(AccessError::Uninitialized)
    }

    /// Keys of the object in iteration order
    pub fn keys(&self) -> Result<impl Iterator<Item = &'a str>, AccessError> {
        Ok(self.map()?.keys().map(String::as_str))
    }

    pub fn get_raw(&self, key: &str) -> Result<&'a Value, AccessError> {
        self.map()?
            .get(key)
            .ok_or_else(|| AccessError::key_not_found(key))
    }

    /// Read `key` as `f64`, accepting integers, floats and numeric strings
    pub fn get_float(&self, key: &str) -> Result<f64, AccessError> {
        let value = self.get_raw(key)?;
        float_value(key, value)
    }

    pub fn get_str(&self, key: &str) -> Result<&'a str, AccessError> {
        match self.get_raw(key)? {
            Value::String(s) => Ok(s.as_str()),
            other => Err(AccessError::type_mismatch(key, "string", JsonType::from_value(other))),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, AccessError> {
        match self.get_raw(key)? {
            Value::Bool(b) => Ok(*b),
            other => Err(AccessError::type_mismatch(key, "boolean", JsonType::from_value(other))),
        }
    }

    /// Read `key` as a non-empty array
    ///
    /// An empty array is an error, not an empty result.
    pub fn get_array(&self, key: &str) -> Result<&'a [Value], AccessError> {
        match self.get_raw(key)? {
            Value::Array(arr) if arr.is_empty() => Err(AccessError::empty_collection(key)),
            Value::Array(arr) => Ok(arr.as_slice()),
            other => Err(AccessError::type_mismatch(key, "array", JsonType::from_value(other))),
        }
    }

    /// Fetch several keys in order, failing on the first one that is missing
    pub fn get_multiple(&self, keys: &[&str]) -> Result<Vec<&'a Value>, AccessError> {
        keys.iter().map(|key| self.get_raw(key)).collect()
    }
}

impl<'a> TryFrom<&'a Value> for Accessor<'a> {
    type Error = AccessError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        Accessor::from_value(value)
    }
}

/// Coerce a bare value to `f64`
///
/// Numbers may arrive as `1`, `1.0` or `"1.0"`; all three are accepted.
/// A string that overflows `f64` is not a number unless it spells out
/// infinity. `key` is only used to label the error.
pub fn float_value(key: &str, value: &Value) -> Result<f64, AccessError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| AccessError::unsupported_type(key, JsonType::from_value(value))),
        Value::String(s) => match s.parse::<f64>() {
            Ok(f) if f.is_infinite() && !is_infinity_literal(s) => {
                Err(AccessError::not_a_number(key, s))
            }
            Ok(f) => Ok(f),
            Err(_) => Err(AccessError::not_a_number(key, s)),
        },
        other => Err(AccessError::unsupported_type(key, JsonType::from_value(other))),
    }
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "foo": 1,
            "float": 1.1337,
            "text_int": "1",
            "text_float": "1.1337",
            "flag": false,
            "list": ["a", 2],
            "empty": [],
            "nested": {"k": "v"},
            "nothing": null
        })
    }

    #[test]
    fn test_initialize_rejects_non_objects() {
        for value in [json!([1, 2]), json!("x"), json!(1), json!(true), json!(null)] {
            let mut accessor = Accessor::new(&value);
            let err = accessor.initialize().unwrap_err();
            assert!(matches!(err, AccessError::TypeMismatch { ref key, .. } if key == ROOT_KEY));
            assert!(!accessor.is_initialized());
        }
    }

    #[test]
    fn test_initialize_twice() {
        let value = json!({});
        let mut accessor = Accessor::new(&value);
        accessor.initialize().unwrap();
        accessor.initialize().unwrap();
        assert!(accessor.is_initialized());
    }

    #[test]
    fn test_getter_before_initialize() {
        let value = sample();
        let accessor = Accessor::new(&value);
        assert_eq!(accessor.get_raw("foo"), Err(AccessError::Uninitialized));
    }

    #[test]
    fn test_get_raw() {
        let value = sample();
        let accessor = Accessor::from_value(&value).unwrap();
        assert_eq!(accessor.get_raw("nested").unwrap(), &json!({"k": "v"}));
        assert_eq!(accessor.get_raw("nothing").unwrap(), &Value::Null);
        assert_eq!(
            accessor.get_raw("missing"),
            Err(AccessError::key_not_found("missing"))
        );
    }

    #[test]
    fn test_get_float_accepts_numbers_and_numeric_strings() {
        let value = sample();
        let accessor = Accessor::from_value(&value).unwrap();
        assert_eq!(accessor.get_float("foo").unwrap(), 1.0);
        assert_eq!(accessor.get_float("float").unwrap(), 1.1337);
        assert_eq!(accessor.get_float("text_int").unwrap(), 1.0);
        assert_eq!(accessor.get_float("text_float").unwrap(), 1.1337);
    }

    #[test]
    fn test_get_float_failures() {
        let value = sample();
        let accessor = Accessor::from_value(&value).unwrap();
        assert!(matches!(
            accessor.get_float("flag"),
            Err(AccessError::UnsupportedType { found: JsonType::Boolean, .. })
        ));
        assert!(matches!(
            accessor.get_float("list"),
            Err(AccessError::UnsupportedType { found: JsonType::Array, .. })
        ));
        assert!(matches!(
            accessor.get_float("nothing"),
            Err(AccessError::UnsupportedType { found: JsonType::Null, .. })
        ));
        assert!(matches!(
            accessor.get_float("missing"),
            Err(AccessError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_float_value_rejects_malformed_strings() {
        for input in ["1.a", "1.33aaa", "1a", "a", "1e400", "-1e400", "0x1p4"] {
            let err = float_value("foo", &json!(input)).unwrap_err();
            assert_eq!(err, AccessError::not_a_number("foo", input));
        }
        assert!(float_value("foo", &json!(false)).is_err());
        assert_eq!(float_value("foo", &json!(-2)).unwrap(), -2.0);
    }

    #[test]
    fn test_float_value_spelled_infinity() {
        assert_eq!(float_value("foo", &json!("inf")).unwrap(), f64::INFINITY);
        assert_eq!(float_value("foo", &json!("-Infinity")).unwrap(), f64::NEG_INFINITY);
        assert_eq!(float_value("foo", &json!("1e308")).unwrap(), 1e308);
    }

    #[test]
    fn test_get_str_and_bool() {
        let value = sample();
        let accessor = Accessor::from_value(&value).unwrap();
        assert_eq!(accessor.get_str("text_int").unwrap(), "1");
        assert!(!accessor.get_bool("flag").unwrap());

        assert_eq!(
            accessor.get_str("foo"),
            Err(AccessError::type_mismatch("foo", "string", JsonType::Integer))
        );
        assert_eq!(
            accessor.get_bool("text_int"),
            Err(AccessError::type_mismatch("text_int", "boolean", JsonType::String))
        );
        assert!(matches!(accessor.get_bool("missing"), Err(AccessError::KeyNotFound { .. })));
    }

    #[test]
    fn test_get_array() {
        let value = sample();
        let accessor = Accessor::from_value(&value).unwrap();
        assert_eq!(accessor.get_array("list").unwrap(), &[json!("a"), json!(2)]);
        assert_eq!(
            accessor.get_array("empty"),
            Err(AccessError::empty_collection("empty"))
        );
        assert!(matches!(
            accessor.get_array("nested"),
            Err(AccessError::TypeMismatch { found: JsonType::Object, .. })
        ));
    }

    #[test]
    fn test_get_multiple() {
        let value = sample();
        let accessor = Accessor::from_value(&value).unwrap();

        let values = accessor.get_multiple(&["flag", "foo"]).unwrap();
        assert_eq!(values, vec![&json!(false), &json!(1)]);

        assert_eq!(
            accessor.get_multiple(&["foo", "gone", "also_gone"]),
            Err(AccessError::key_not_found("gone"))
        );
        assert!(accessor.get_multiple(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_keys_and_try_from() {
        let value = json!({"a": 1, "b": 2});
        let accessor = Accessor::try_from(&value).unwrap();
        let mut keys: Vec<&str> = accessor.keys().unwrap().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
