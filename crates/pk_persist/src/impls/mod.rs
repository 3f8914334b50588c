//! Provide [`Persist`] implementations for the native leaf types.
//!
//! - [`composite_debug`]: Used to implement [`Persist::persist_debug`] for
//!   composite types.
//!
//! ## Implemented Menu
//!
//! - `i8`-`i64`, `isize`
//! - `u8`-`u64`, `usize`
//! - `f32`, `f64`
//! - `bool`
//! - `String`
//!
//! 128-bit integers stay out of the menu: the leaf encodings are 64-bit wide,
//! so there is no lossless seat for them.
//!
//! [`Persist`]: crate::Persist
//! [`Persist::persist_debug`]: crate::Persist::persist_debug
//! [`composite_debug`]: crate::impls::composite_debug

// -----------------------------------------------------------------------------
// Modules

mod common;

// i8-i64, u8-u64, isize, usize, f32, f64, bool
mod native_basic;
// String
mod string;

// -----------------------------------------------------------------------------
// Exports

pub use common::composite_debug;
