use super::{ColumnDef, Statement};

use forcedfields_core::{Backend, Column, Table};

/// A statement to add a column to a table.
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// Name of the table to add the column to.
    pub table: String,

    /// Column definition.
    pub column: ColumnDef,
}

impl Statement {
    /// Adds a column to a table.
    pub fn add_column(table: &Table, column: &Column, backend: &Backend) -> Self {
        AddColumn {
            table: table.name.clone(),
            column: ColumnDef::from_schema(column, backend),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
