use super::{Expr, Operation, Record, Statement};

use forcedfields_core::{bail, err, schema::Column, Result, Table};

/// A single-row insert whose values were resolved by each column's field.
#[derive(Debug, Clone)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Columns, in table order
    pub columns: Vec<String>,

    /// One resolved value per column
    pub values: Vec<Expr>,
}

impl Insert {
    /// Columns written with the database's current time.
    pub fn deferred_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| value.is_now())
            .map(|(column, _)| column.as_str())
    }
}

impl Statement {
    /// Inserts `record` into `table`.
    ///
    /// Every column is written. Columns missing from the record resolve to the
    /// field's default or `NULL`, and automatic timestamp policies overwrite
    /// whatever the record holds.
    pub fn insert(table: &Table, record: &Record) -> Result<Self> {
        check_record(table, record)?;

        let mut columns = Vec::with_capacity(table.columns.len());
        let mut values = Vec::with_capacity(table.columns.len());

        for column in &table.columns {
            columns.push(column.name.clone());
            values.push(resolve(table, column, record, Operation::Insert)?);
        }

        Ok(Insert {
            table: table.name.clone(),
            columns,
            values,
        }
        .into())
    }
}

/// Resolves the value written to `column`, validating whatever the record
/// supplied unless an automatic policy replaced it.
pub(super) fn resolve(
    table: &Table,
    column: &Column,
    record: &Record,
    op: Operation,
) -> Result<Expr> {
    let value = record.get(&column.name);
    let expr = column.field.resolve_write_value(op, value.cloned());

    if let Some(value) = value {
        if expr.as_value() == Some(value) {
            column.field.validate(value).map_err(|e| {
                e.context(err!("table `{}` column `{}`", table.name, column.name))
            })?;
        }
    }

    Ok(expr)
}

pub(super) fn check_record(table: &Table, record: &Record) -> Result<()> {
    for name in record.keys() {
        if table.get(name).is_none() {
            bail!("table `{}` has no column `{}`", table.name, name);
        }
    }
    Ok(())
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
