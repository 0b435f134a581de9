use super::{
    insert::{check_record, resolve},
    Expr, Operation, Record, Statement, Value,
};

use forcedfields_core::{bail, Result, Table};

/// An update of one or more rows with values resolved by each column's field.
#[derive(Debug, Clone)]
pub struct Update {
    /// Table to update
    pub table: String,

    /// Column assignments, in table order
    pub assignments: Vec<Assignment>,

    /// Restricts the rows updated. `None` updates every row.
    pub filter: Option<Filter>,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: String,
    pub value: Expr,
}

/// An equality filter on a single column, usually the primary key.
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Update {
    /// Columns written with the database's current time.
    pub fn deferred_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.assignments
            .iter()
            .filter(|assignment| assignment.value.is_now())
            .map(|assignment| assignment.column.as_str())
    }
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter {
            column: column.into(),
            value: value.into(),
        }
    }
}

impl Statement {
    /// Writes `record` over the rows matching `filter`.
    ///
    /// Like a model save, every column of the table is assigned. The filter
    /// column is never assigned.
    pub fn update(table: &Table, record: &Record, filter: Option<Filter>) -> Result<Self> {
        check_record(table, record)?;

        let filter_column = filter.as_ref().map(|filter| filter.column.as_str());

        let assignments = table
            .columns
            .iter()
            .filter(|column| Some(column.name.as_str()) != filter_column)
            .map(|column| -> Result<Assignment> {
                Ok(Assignment {
                    column: column.name.clone(),
                    value: resolve(table, column, record, Operation::Update)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if assignments.is_empty() {
            bail!("table `{}` has no columns to update", table.name);
        }

        Ok(Update {
            table: table.name.clone(),
            assignments,
            filter,
        }
        .into())
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
