use crate::accessor::AccessError;
use thiserror::Error;

/// Why a record could not be extracted
///
/// Any of these means no record was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error("cant initialize accessor: {0}")]
    InitializationFailed(#[source] AccessError),

    #[error("key '{field}' is not valid")]
    Field {
        field: &'static str,
        #[source]
        source: AccessError,
    },

    #[error("key '{field}' is not a valid russian telephone number: \"{value}\"")]
    ValidationFailed { field: &'static str, value: String },
}

impl ExtractError {
    pub fn field(field: &'static str, source: AccessError) -> Self {
        ExtractError::Field { field, source }
    }

    /// The record field the failure is attributed to, if any
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            ExtractError::InitializationFailed(_) => None,
            ExtractError::Field { field, .. } | ExtractError::ValidationFailed { field, .. } => {
                Some(*field)
            }
        }
    }

    /// The getter failure underneath, if this came from the accessor
    pub fn access_error(&self) -> Option<&AccessError> {
        match self {
            ExtractError::InitializationFailed(source) | ExtractError::Field { source, .. } => {
                Some(source)
            }
            ExtractError::ValidationFailed { .. } => None,
        }
    }
}
