use forcedfields_core::{Backend, Column, Field};

/// A column definition compiled for one backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,

    /// Type keyword, e.g. `TIMESTAMP WITHOUT TIME ZONE`.
    pub ty: String,

    /// DEFAULT and trigger clause, if any.
    pub default: Option<String>,

    pub nullable: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column, backend: &Backend) -> ColumnDef {
        ColumnDef::from_field(&column.name, &*column.field, backend)
    }

    pub fn from_field(name: &str, field: &dyn Field, backend: &Backend) -> ColumnDef {
        ColumnDef {
            name: name.to_string(),
            ty: field.compile_type(backend),
            default: field.compile_default(backend),
            nullable: field.nullable(),
        }
    }
}
