use super::{ColumnDef, Statement};

use forcedfields_core::{bail, Backend, Result, Table};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(table: &Table, backend: &Backend) -> Result<Self> {
        if table.columns.is_empty() {
            bail!("table `{}` has no columns", table.name);
        }

        Ok(CreateTable {
            name: table.name.clone(),
            columns: table
                .columns
                .iter()
                .map(|column| ColumnDef::from_schema(column, backend))
                .collect(),
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
