// -----------------------------------------------------------------------------
// Modules

mod error;
mod leaf;
mod persist;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use persist::impl_persist_cast_fn;

// -----------------------------------------------------------------------------
// Exports

pub use error::PersistError;
pub use leaf::{Leaf, LeafKind};
pub use persist::Persist;
