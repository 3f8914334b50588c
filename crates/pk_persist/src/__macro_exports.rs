//! Hidden re-exports consumed by the code `#[derive(Persist)]` generates.
//!
//! The invoking crate does not necessarily have `alloc` in its extern
//! prelude, so generated code routes every non-`core` path through this
//! module. Not public API; may change without notice.

/// Types the macro expansion needs from `alloc`.
pub mod macro_utils {
    pub use alloc::boxed::Box;
}
