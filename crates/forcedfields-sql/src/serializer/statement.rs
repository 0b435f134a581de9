use super::{Comma, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::AddColumn(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

struct Columns<'a>(&'a [stmt::ColumnDef]);

impl ToSql for Columns<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        for (index, column) in self.0.iter().enumerate() {
            fmt!(f, "\n    " column);
            if index < self.0.len() - 1 {
                fmt!(f, ",");
            }
        }

        fmt!(f, "\n");
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let columns = Columns(&self.columns);

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let column = &self.column;

        fmt!(f, "ALTER TABLE " table_name " ADD COLUMN " column);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table_name " (" columns ") VALUES (" values ")");

        let mut deferred = self.deferred_columns().peekable();
        if deferred.peek().is_none() {
            return;
        }

        // Hand database-computed values back so the caller does not have to
        // issue a second query.
        if f.serializer.backend.capability().returning {
            fmt!(f, " RETURNING " Comma(deferred.map(Ident)));
        } else {
            tracing::debug!(
                backend = %f.serializer.backend,
                "RETURNING unsupported; database-computed timestamps must be re-read"
            );
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let assignments = Comma(&self.assignments);

        fmt!(f, "UPDATE " table_name " SET " assignments);

        if let Some(filter) = &self.filter {
            let value = &filter.value;
            fmt!(f, " WHERE " Ident(&filter.column) " = " value);
        }
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) " = " value);
    }
}
