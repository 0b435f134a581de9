use super::{validate_null, Field};
use crate::{
    driver::Backend,
    stmt::{Expr, Operation, Value},
    Error, Result,
};

use serde::{Deserialize, Serialize};

/// Options accepted when declaring a [`FixedChar`] field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedCharOptions {
    /// Length of the `CHAR(n)` column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Application-side default used when no value is set. `Some(Value::Null)`
    /// is an explicit null default.
    #[serde(
        default,
        deserialize_with = "super::explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub null: bool,
}

/// A text column stored as a fixed-length `CHAR(n)`.
///
/// Variable-length text fields fall back to an empty string when a row is
/// written without a value. This field writes `NULL` instead, keeping "no
/// data" distinct from "empty".
#[derive(Debug, Clone)]
pub struct FixedChar {
    max_length: u64,
    default: Option<Value>,
    nullable: bool,
}

impl FixedChar {
    pub fn new(options: FixedCharOptions) -> Result<FixedChar> {
        let max_length = match options.max_length {
            Some(0) => {
                return Err(Error::invalid_configuration(
                    "max_length must be a positive integer",
                ))
            }
            Some(max_length) => max_length,
            None => {
                return Err(Error::invalid_configuration(
                    "fixed char fields must define a max_length",
                ))
            }
        };

        match &options.default {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => {
                return Err(Error::invalid_configuration(format!(
                    "default {other:?} is not a string"
                )))
            }
        }

        Ok(FixedChar {
            max_length,
            default: options.default,
            nullable: options.null,
        })
    }

    pub fn max_length(&self) -> u64 {
        self.max_length
    }

    /// Returns `true` if `backend` caps `CHAR(n)` below this field's length.
    pub fn exceeds_char_limit(&self, backend: &Backend) -> bool {
        backend
            .capability()
            .max_char_length
            .is_some_and(|limit| self.max_length > limit)
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The options this field was declared with.
    pub fn options(&self) -> FixedCharOptions {
        FixedCharOptions {
            max_length: Some(self.max_length),
            default: self.default.clone(),
            null: self.nullable,
        }
    }
}

impl Field for FixedChar {
    fn compile_type(&self, backend: &Backend) -> String {
        // The engine rejects the DDL; its error is left to surface unchanged.
        if self.exceeds_char_limit(backend) {
            tracing::warn!(
                %backend,
                max_length = self.max_length,
                limit = ?backend.capability().max_char_length,
                "CHAR length exceeds the backend limit"
            );
        }

        format!("CHAR({})", self.max_length)
    }

    // TODO: emit DEFAULT for string defaults once literal quoting is shared
    // with the timestamp field.
    fn compile_default(&self, _backend: &Backend) -> Option<String> {
        None
    }

    fn nullable(&self) -> bool {
        self.nullable
    }

    fn resolve_write_value(&self, _op: Operation, value: Option<Value>) -> Expr {
        let value = value
            .or_else(|| self.default.clone())
            .unwrap_or(Value::Null);

        Expr::Value(value)
    }

    fn validate(&self, value: &Value) -> Result<()> {
        validate_null(self.nullable, value)?;

        match value {
            Value::Null => Ok(()),
            Value::String(s) => {
                let len = s.chars().count();
                if len as u64 > self.max_length {
                    return Err(Error::validation_length(len, self.max_length as usize));
                }
                Ok(())
            }
            _ => Err(Error::validation_type("string")),
        }
    }
}
