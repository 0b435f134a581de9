mod backend;
pub use backend::Backend;

mod capability;
pub use capability::Capability;
