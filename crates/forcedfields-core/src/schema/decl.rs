use super::{Field, FixedChar, FixedCharOptions, Timestamp, TimestampOptions};
use crate::Result;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A field kind together with its named construction options.
///
/// This is how the forced fields are registered for declarative models: the
/// `kind` tag selects the descriptor and the remaining keys are its options.
///
/// ```
/// # use forcedfields_core::schema::FieldDecl;
/// let decl: FieldDecl = serde_json::from_str(
///     r#"{ "kind": "timestamp", "auto_create": true }"#,
/// ).unwrap();
/// assert!(decl.build().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDecl {
    FixedChar(FixedCharOptions),
    Timestamp(TimestampOptions),
}

/// A table declared as an ordered set of named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDecl {
    pub table: String,
    pub fields: IndexMap<String, FieldDecl>,
}

impl FieldDecl {
    /// Validates the options and constructs the descriptor.
    pub fn build(&self) -> Result<Box<dyn Field>> {
        Ok(match self {
            FieldDecl::FixedChar(options) => Box::new(FixedChar::new(options.clone())?),
            FieldDecl::Timestamp(options) => Box::new(Timestamp::new(options.clone())?),
        })
    }
}

impl From<FixedChar> for FieldDecl {
    fn from(value: FixedChar) -> Self {
        FieldDecl::FixedChar(value.options())
    }
}

impl From<Timestamp> for FieldDecl {
    fn from(value: Timestamp) -> Self {
        FieldDecl::Timestamp(value.options())
    }
}
