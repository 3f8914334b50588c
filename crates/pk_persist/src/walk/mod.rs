//! Drive values into and out of archives.
//!
//! The walk is the only place where [`Properties`](crate::props::Properties)
//! metadata and the [`Archive`](crate::archive::Archive) contract meet:
//!
//! - [`serialize`] visits every property in declaration order and stores it
//!   under its name.
//! - [`deserialize`] loads stored entries back into an existing value.
//! - [`from_archive`] is the common shortcut, it loads into a
//!   default-constructed value.
//!
//! Neither direction knows how an archive encodes its entries. Everything
//! format-specific stays behind the archive.

// -----------------------------------------------------------------------------
// Modules

crate::cfg::debug! {
    mod trace;
}

mod de;
mod ser;

#[cfg(test)]
mod samples;

// -----------------------------------------------------------------------------
// Exports

pub use de::{deserialize, from_archive};
pub use ser::serialize;
