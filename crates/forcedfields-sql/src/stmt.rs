mod add_column;
pub use add_column::AddColumn;

mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod insert;
pub use insert::Insert;

mod update;
pub use update::{Assignment, Filter, Update};

pub use forcedfields_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateTable(CreateTable),
    Insert(Insert),
    Update(Update),
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }

    /// Columns whose written value is computed by the database and must be
    /// re-read to be known.
    pub fn deferred_columns(&self) -> Vec<&str> {
        match self {
            Statement::Insert(insert) => insert.deferred_columns().collect(),
            Statement::Update(update) => update.deferred_columns().collect(),
            _ => vec![],
        }
    }
}
