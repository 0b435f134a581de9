use crate::stmt::{Expr, Value};

use jiff::{tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

/// Where "now" comes from when an automatic timestamp policy fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NowStrategy {
    /// The database evaluates `CURRENT_TIMESTAMP` while executing the write.
    /// The stored value has to be re-read to be known by the application.
    #[default]
    Database,

    /// The application reads its own clock (UTC) and binds the value like any
    /// other parameter.
    Client,
}

impl NowStrategy {
    pub(crate) fn expr(self) -> Expr {
        match self {
            NowStrategy::Database => Expr::Now,
            NowStrategy::Client => {
                let now = Timestamp::now().to_zoned(TimeZone::UTC).datetime();
                Expr::Value(Value::DateTime(now))
            }
        }
    }

    pub(crate) fn is_database(&self) -> bool {
        matches!(self, NowStrategy::Database)
    }
}
