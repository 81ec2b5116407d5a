//! Precondition failures reported by generation, with a stable code each.

use std::fmt;

use anyhow::Error;
use serde::Serialize;
use serde_json::{json, Value};

/// Process exit code for precondition failures.
pub const USAGE_EXIT_CODE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidScale,
    InvalidPermutation,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidScale => "INVALID_SCALE",
            Self::InvalidPermutation => "INVALID_PERMUTATION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CodedError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
}

impl CodedError {
    pub fn invalid_scale(provided: f64) -> Self {
        Self {
            code: ErrorCode::InvalidScale,
            message: format!("scale must be a finite number greater than zero, got {provided}"),
            // NaN and infinities have no JSON number form
            details: json!({
                "provided": provided.to_string(),
                "requirement": "finite, > 0"
            }),
        }
    }

    pub fn permutation_length(provided: usize, expected: usize) -> Self {
        Self {
            code: ErrorCode::InvalidPermutation,
            message: format!("permutation order must have {expected} entries, got {provided}"),
            details: json!({
                "provided_len": provided,
                "expected_len": expected
            }),
        }
    }

    pub fn permutation_duplicate(index: u8) -> Self {
        Self {
            code: ErrorCode::InvalidPermutation,
            message: format!("permutation order repeats lattice index {index}"),
            details: json!({ "duplicate": index }),
        }
    }

    pub fn exit_code(&self) -> u8 {
        USAGE_EXIT_CODE
    }

    pub fn envelope(&self) -> ErrorEnvelope<'_> {
        ErrorEnvelope {
            ok: false,
            error: self,
        }
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CodedError {}

impl Serialize for CodedError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut body = serializer.serialize_struct("CodedError", 3)?;
        body.serialize_field("code", &self.code)?;
        body.serialize_field("message", &self.message)?;
        body.serialize_field("details", &self.details)?;
        body.end()
    }
}

/// `{ "ok": false, "error": { code, message, details } }` as the CLI prints it.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub ok: bool,
    pub error: &'a CodedError,
}

/// Walks the anyhow chain, so coded errors survive added context.
pub fn find_coded_error(error: &Error) -> Option<&CodedError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CodedError>())
}

pub fn error_code(error: &Error) -> Option<ErrorCode> {
    find_coded_error(error).map(|coded| coded.code)
}
