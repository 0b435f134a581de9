use super::{Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Expr::Value(value) => value.to_sql(f),
            // Emitted bare so it is never bound or quoted as a string literal.
            stmt::Expr::Now => fmt!(f, f.serializer.backend.current_timestamp()),
        }
    }
}

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder)
    }
}
