#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Backend, Capability};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Column, Field, Table};

pub mod stmt;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
