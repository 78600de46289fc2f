use crate::accessor::Accessor;
use crate::record::error::ExtractError;
use crate::record::phone::is_russian_phone;
use crate::record::types::{ExtractConfig, Item, Record, KNOWN_KEYS, QOO_KEY};
use log::debug;
use serde_json::Value;

/// Pulls a [`Record`] out of a decoded JSON object
pub struct RecordExtractor {
    config: ExtractConfig,
}

impl RecordExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        RecordExtractor { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract and validate every known field
    ///
    /// Fields are read in a fixed order (`foo`, `bar`, `baz`, `Qoo`, `foz`)
    /// and the first failure ends the call; later keys are never looked at.
    pub fn extract(&self, value: &Value) -> Result<Record, ExtractError> {
        let mut accessor = Accessor::new(value);
        accessor
            .initialize()
            .map_err(ExtractError::InitializationFailed)?;

        let mut record = Record::default();

        record.foo = accessor
            .get_float("foo")
            .map_err(|e| ExtractError::field("foo", e))?;
        debug!("foo = {}", record.foo);

        record.bar = accessor
            .get_str("bar")
            .map_err(|e| ExtractError::field("bar", e))?
            .to_string();
        debug!("bar = {:?}", record.bar);

        let baz = accessor
            .get_str("baz")
            .map_err(|e| ExtractError::field("baz", e))?;
        if !is_russian_phone(baz) {
            return Err(ExtractError::ValidationFailed {
                field: "baz",
                value: baz.to_string(),
            });
        }
        record.baz = baz.to_string();
        debug!("baz = {:?}", record.baz);

        record.qoo = accessor
            .get_bool(QOO_KEY)
            .map_err(|e| ExtractError::field(QOO_KEY, e))?;
        debug!("{} = {}", QOO_KEY, record.qoo);

        record.foz = accessor
            .get_array("foz")
            .map_err(|e| ExtractError::field("foz", e))?
            .iter()
            .map(Item::from)
            .collect();
        debug!("foz has {} items", record.foz.len());

        if self.config.collect_unknown {
            for key in accessor.keys().map_err(ExtractError::InitializationFailed)? {
                if KNOWN_KEYS.contains(&key) {
                    continue;
                }
                let raw = accessor
                    .get_raw(key)
                    .map_err(ExtractError::InitializationFailed)?;
                debug!("keeping unknown key {:?}", key);
                record.extra.insert(key.to_string(), raw.clone());
            }
        }

        Ok(record)
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}
