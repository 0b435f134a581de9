use super::{Field, ModelDecl};
use crate::Result;

/// A table whose columns are backed by field descriptors.
#[derive(Debug)]
pub struct Table {
    /// The name of the table in the database.
    pub name: String,

    /// Columns in declaration order.
    pub columns: Vec<Column>,
}

#[derive(Debug)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The descriptor deciding the column's DDL and written values.
    pub field: Box<dyn Field>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            columns: vec![],
        }
    }

    /// Builds every declared field, failing on the first invalid one.
    pub fn from_decl(decl: &ModelDecl) -> Result<Table> {
        let mut table = Table::new(&decl.table);

        for (name, field) in &decl.fields {
            let field = field.build().map_err(|err| {
                err.context(err!("table `{}` column `{}`", decl.table, name))
            })?;
            table.columns.push(Column {
                name: name.clone(),
                field,
            });
        }

        Ok(table)
    }

    pub fn column(mut self, name: impl Into<String>, field: impl Field + 'static) -> Table {
        self.columns.push(Column {
            name: name.into(),
            field: Box::new(field),
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
