use super::Value;

/// The value placed in a write operation's value list.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A value bound by the application.
    Value(Value),

    /// The current time, computed by the database server when the statement
    /// executes. The written value is only known after re-reading the row.
    Now,
}

impl Expr {
    pub fn is_now(&self) -> bool {
        matches!(self, Expr::Now)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Expr::Value(value) => Some(value),
            Expr::Now => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}
