mod decl;
pub use decl::{FieldDecl, ModelDecl};

pub mod field;
pub use field::{AutoNow, Field, FixedChar, FixedCharOptions, NowStrategy, Timestamp, TimestampOptions};

mod table;
pub use table::{Column, Table};
