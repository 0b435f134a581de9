#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod expr;
mod statement;

use crate::stmt::Statement;

use forcedfields_core::Backend;

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The backend determines identifier quoting, placeholder syntax, and the
    /// DDL emitted by each field.
    backend: Backend,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        tracing::trace!(backend = %self.backend, sql = %ret, "serialized statement");
        ret
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }
}
