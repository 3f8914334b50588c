//! Property descriptors and per-type property lists.
//!
//! A composite type declares, once and in order, which of its fields persist
//! and under which external names. The declaration is a `static` list of
//! [`Property`] descriptors wrapped in a [`PropertyList`], surfaced through
//! the [`Properties`] trait. Everything else in this crate works off that
//! list.

// -----------------------------------------------------------------------------
// Modules

mod list;
mod properties;
mod property;

// -----------------------------------------------------------------------------
// Exports

pub use list::PropertyList;
pub use properties::Properties;
pub use property::Property;
