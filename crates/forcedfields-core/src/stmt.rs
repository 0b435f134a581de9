mod expr;
pub use expr::Expr;

mod operation;
pub use operation::Operation;

mod value;
pub use value::Value;

/// In-memory attribute values of one row, keyed by column name.
///
/// A column missing from the record has no value set, which is distinct from
/// a column set to [`Value::Null`].
pub type Record = indexmap::IndexMap<String, Value>;
