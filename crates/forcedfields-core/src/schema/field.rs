mod auto_now;
pub use auto_now::AutoNow;

mod fixed_char;
pub use fixed_char::{FixedChar, FixedCharOptions};

mod now;
pub use now::NowStrategy;

mod timestamp;
pub use timestamp::{Timestamp, TimestampOptions};

use crate::{
    driver::Backend,
    stmt::{Expr, Operation, Value},
    Result,
};

use std::fmt;

/// The hooks a schema compiler and a write pipeline call on each column.
///
/// Every method is a pure function of the descriptor's configuration and its
/// arguments: calling one twice with the same inputs yields the same output.
/// The only exception is a [`Timestamp`] configured with
/// [`NowStrategy::Client`], whose resolved value reads the clock.
pub trait Field: fmt::Debug + Send + Sync {
    /// The SQL type keyword for the column on `backend`.
    fn compile_type(&self, backend: &Backend) -> String;

    /// The DEFAULT (and trigger) clause for the column on `backend`, or `None`
    /// when no clause should be emitted at all.
    fn compile_default(&self, backend: &Backend) -> Option<String>;

    /// Whether the column accepts `NULL`.
    fn nullable(&self) -> bool;

    /// Resolves the value written for this column by `op`.
    ///
    /// `value` is the in-memory attribute value, `None` when the application
    /// never set one.
    fn resolve_write_value(&self, op: Operation, value: Option<Value>) -> Expr;

    /// Checks an attribute value against the field's constraints.
    fn validate(&self, value: &Value) -> Result<()>;
}

/// Shared `NULL` check used by both descriptors.
fn validate_null(nullable: bool, value: &Value) -> Result<()> {
    if value.is_null() && !nullable {
        return Err(crate::Error::validation_null());
    }
    Ok(())
}

/// Deserializes a present option, `null` included, as `Some`.
///
/// Paired with `#[serde(default)]` so a missing key stays `None` while an
/// explicit `null` becomes `Some(Value::Null)`.
fn explicit<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <Value as serde::Deserialize>::deserialize(deserializer).map(Some)
}
