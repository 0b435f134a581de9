use super::{validate_null, AutoNow, Field, NowStrategy};
use crate::{
    driver::Backend,
    stmt::{Expr, Operation, Value},
    Error, Result,
};

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// Type keyword used when the backend is not recognized.
const GENERIC_DATETIME: &str = "DATETIME";

/// Options accepted when declaring a [`Timestamp`] field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimestampOptions {
    /// Set the current time when the row is inserted.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_create: bool,

    /// Set the current time on every insert and update.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_update: bool,

    /// Set the current time on updates only.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_update_only: bool,

    /// Statically configured default. `Some(Value::Null)` is an explicit
    /// `DEFAULT NULL`.
    #[serde(
        default,
        deserialize_with = "explicit_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub null: bool,

    #[serde(default, skip_serializing_if = "NowStrategy::is_database")]
    pub now: NowStrategy,
}

/// A timezone-free system timestamp column.
///
/// Compiles to the most precise timestamp-without-timezone type each backend
/// offers and moves "automatic" timestamps into the database where possible:
///
/// | backend    | type                          | refresh on update            |
/// |------------|-------------------------------|------------------------------|
/// | MySQL      | `TIMESTAMP`                   | `ON UPDATE CURRENT_TIMESTAMP` |
/// | PostgreSQL | `TIMESTAMP WITHOUT TIME ZONE` | write-time substitution only |
/// | SQLite     | `DATETIME`                    | write-time substitution only |
///
/// On MySQL the `ON UPDATE` clause also fires for bulk updates issued outside
/// the application, unlike the write-time substitution.
///
/// With no automatic option and no default, no DEFAULT clause is emitted and
/// each engine's own implicit default applies. MySQL in particular may add
/// `DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP` to the first
/// `TIMESTAMP` column of a table unless `explicit_defaults_for_timestamp` is
/// enabled on the server.
#[derive(Debug, Clone)]
pub struct Timestamp {
    auto: AutoNow,
    default: Option<Value>,
    nullable: bool,
    now: NowStrategy,
}

impl Timestamp {
    pub fn new(options: TimestampOptions) -> Result<Timestamp> {
        let auto = AutoNow {
            create: options.auto_create,
            update: options.auto_update,
            update_only: options.auto_update_only,
        };

        if auto.update && auto.update_only {
            return Err(Error::invalid_configuration(
                "the option auto_update is mutually exclusive with the option auto_update_only",
            ));
        }

        if auto.create && auto.update_only {
            return Err(Error::invalid_configuration(
                "the option auto_create is mutually exclusive with the option auto_update_only",
            ));
        }

        let default_sources = [auto.update, auto.create, options.default.is_some()];
        if default_sources.iter().filter(|set| **set).count() > 1 {
            return Err(Error::invalid_configuration(
                "the options auto_update, auto_create, and default are mutually exclusive; \
                 only one of these options may be present",
            ));
        }

        let default = options.default.map(normalize_default).transpose()?;

        Ok(Timestamp {
            auto,
            default,
            nullable: options.null,
            now: options.now,
        })
    }

    pub fn auto(&self) -> AutoNow {
        self.auto
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn now_strategy(&self) -> NowStrategy {
        self.now
    }

    /// The options this field was declared with.
    pub fn options(&self) -> TimestampOptions {
        TimestampOptions {
            auto_create: self.auto.create,
            auto_update: self.auto.update,
            auto_update_only: self.auto.update_only,
            default: self.default.clone(),
            null: self.nullable,
            now: self.now,
        }
    }
}

impl Field for Timestamp {
    fn compile_type(&self, backend: &Backend) -> String {
        match backend {
            Backend::Mysql => "TIMESTAMP".to_string(),
            Backend::Postgresql => "TIMESTAMP WITHOUT TIME ZONE".to_string(),
            Backend::Sqlite => "DATETIME".to_string(),
            Backend::Other(name) => {
                tracing::warn!(
                    backend = %name,
                    "unrecognized backend; timestamp column falls back to {GENERIC_DATETIME}"
                );
                GENERIC_DATETIME.to_string()
            }
        }
    }

    fn compile_default(&self, backend: &Backend) -> Option<String> {
        let now = backend.current_timestamp();
        let on_update = backend.capability().on_update_current_timestamp;
        let mut clause = vec![];

        if self.auto.defaults_to_now() {
            clause.push(format!("DEFAULT {now}"));
        } else if let Some(default) = &self.default {
            clause.push(format!("DEFAULT {}", default_literal(default)));
        }

        if self.auto.refreshes_on_update() && on_update {
            clause.push(format!("ON UPDATE {now}"));
        }

        if clause.is_empty() {
            None
        } else {
            Some(clause.join(" "))
        }
    }

    fn nullable(&self) -> bool {
        self.nullable
    }

    fn resolve_write_value(&self, op: Operation, value: Option<Value>) -> Expr {
        if self.auto.applies(op) {
            tracing::debug!(?op, now = ?self.now, "overwriting timestamp with current time");
            return self.now.expr();
        }

        let value = value
            .or_else(|| self.default.clone())
            .unwrap_or(Value::Null);

        Expr::Value(value)
    }

    fn validate(&self, value: &Value) -> Result<()> {
        validate_null(self.nullable, value)?;

        match value {
            Value::Null | Value::DateTime(_) => Ok(()),
            Value::String(s) if s.parse::<DateTime>().is_ok() => Ok(()),
            _ => Err(Error::validation_type("datetime")),
        }
    }
}

/// Reads a declared default, turning strings that parse as a civil datetime
/// into [`Value::DateTime`]. Anything else is left for [`Timestamp::new`] to
/// reject.
fn explicit_datetime<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = super::explicit(deserializer)?;

    Ok(value.map(|value| match value {
        Value::String(s) => match s.parse::<DateTime>() {
            Ok(datetime) => Value::DateTime(datetime),
            Err(_) => Value::String(s),
        },
        other => other,
    }))
}

fn normalize_default(value: Value) -> Result<Value> {
    match value {
        Value::Null | Value::DateTime(_) => Ok(value),
        Value::String(s) => {
            let datetime = s.parse::<DateTime>().map_err(|err| {
                Error::from(err).context(Error::invalid_configuration(format!(
                    "default {s:?} is not a valid datetime"
                )))
            })?;
            Ok(Value::DateTime(datetime))
        }
        other => Err(Error::invalid_configuration(format!(
            "default {other:?} is not a valid datetime"
        ))),
    }
}

/// Renders a normalized default as a DDL literal.
///
/// Datetimes render as `'YYYY-MM-DD HH:MM:SS'`, with microseconds appended
/// only when non-zero. Every supported engine accepts this form in a DEFAULT
/// clause.
fn default_literal(value: &Value) -> String {
    match value {
        Value::DateTime(dt) => {
            let mut literal = format!(
                "'{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            );

            let micros = dt.subsec_nanosecond() / 1_000;
            if micros != 0 {
                literal.push_str(&format!(".{micros:06}"));
            }

            literal.push('\'');
            literal
        }
        _ => "NULL".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn literal_without_fraction() {
        let value = Value::DateTime(date(2017, 3, 9).at(8, 5, 1, 0));
        assert_eq!(default_literal(&value), "'2017-03-09 08:05:01'");
    }

    #[test]
    fn literal_with_microseconds() {
        let value = Value::DateTime(date(2017, 3, 9).at(8, 5, 1, 123_456_789));
        assert_eq!(default_literal(&value), "'2017-03-09 08:05:01.123456'");
    }

    #[test]
    fn literal_null() {
        assert_eq!(default_literal(&Value::Null), "NULL");
    }

    #[test]
    fn string_default_is_normalized() {
        let value = normalize_default(Value::from("2017-03-09T08:05:01")).unwrap();
        assert_eq!(value, Value::DateTime(date(2017, 3, 9).at(8, 5, 1, 0)));
    }

    #[test]
    fn garbage_default_is_rejected() {
        let err = normalize_default(Value::from("yesterday")).unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = normalize_default(Value::I64(42)).unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
