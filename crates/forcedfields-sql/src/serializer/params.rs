use super::{Formatter, ToSql};

use forcedfields_core::{stmt, Backend};

pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// 1-based position of a bound parameter.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        // Writing to a `String` cannot fail.
        let _ = match f.serializer.backend {
            Backend::Mysql => write!(f.dst, "?"),
            Backend::Postgresql => write!(f.dst, "${}", self.0),
            Backend::Sqlite | Backend::Other(_) => write!(f.dst, "?{}", self.0),
        };
    }
}
