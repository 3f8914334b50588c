//! The archive side of the engine: named-slot storage behind one contract.
//!
//! - [`Archive`]: the storage contract a walk drives. Store and retrieve by
//!   name, plus whole-document file transport.
//! - [`Document`]: the shared in-memory tree of named nodes. Backends reuse
//!   it and only differ in their text format.
//! - [`JsonArchive`]: the JSON backend, one document per JSON object.
//!
//! The walk never encodes values itself. It hands every property to an
//! archive as a [`Leaf`] or as a finished nested archive, which keeps the
//! traversal independent from any storage format.
//!
//! [`Leaf`]: crate::Leaf

// -----------------------------------------------------------------------------
// Modules

mod contract;
mod document;
mod json;

// -----------------------------------------------------------------------------
// Exports

pub use contract::{Archive, DocumentError};
pub use document::{Document, DocumentIter, Node};
pub use json::{JsonArchive, JsonValueError};
