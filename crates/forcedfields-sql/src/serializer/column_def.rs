use super::{Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let default = self.default.as_ref().map(|default| (" ", default));
        let null = if self.nullable { " NULL" } else { " NOT NULL" };

        fmt!(f, name " " self.ty.as_str() default null)
    }
}
