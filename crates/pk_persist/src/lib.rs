#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    pk_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `pk_persist` in
// doc testing. But `macro_utils::Manifest` can only choose one, so we must
// have an `extern self` to ensure `pk_persist` can be used as an alias for
// `crate`.
extern crate self as pk_persist;

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod persistence;

pub mod archive;
pub mod impls;
pub mod ops;
pub mod props;
pub mod walk;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use persistence::{Leaf, LeafKind, Persist, PersistError};
pub use props::Properties;
pub use pk_persist_derive as derive;
