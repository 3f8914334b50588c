//! This independent module is used to provide the required path.
//! So as to minimize changes when the `pk_persist` structure is modified.
//!
//! The only special feature is the path of pk_persist itself,
//! See [`pk_persist`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `pk_persist` crate.
///
/// Not all crates can access the persistence crate itself through
/// `pk_persist`, we have to scan the builder's `cargo.toml`.
///
/// 1. For crates that depend on `pk_persist`, `::pk_persist` is returned here.
/// 2. For crates that depend on `persistkit`, `::persistkit::persist` is returned here.
/// 3. For crates that depend on `pk_core`, `::pk_core::persist` is returned here.
/// 4. For crates that depend on `pk`, `::pk::persist` is returned here.
/// 5. For other situations, `::pk_persist` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining
/// read-write lock permissions, querying content...), so the crate path is
/// mainly obtained through parameter passing rather than reacquiring.
pub(crate) fn pk_persist() -> syn::Path {
    pk_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("pk_persist"))
}

// -----------------------------------------------------------------------------
// Emitted Paths

#[inline(always)]
pub(crate) fn macro_utils_(pk_persist_path: &syn::Path) -> TokenStream {
    quote! {
        #pk_persist_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn persist_(pk_persist_path: &syn::Path) -> TokenStream {
    quote! {
        #pk_persist_path::Persist
    }
}

#[inline(always)]
pub(crate) fn properties_(pk_persist_path: &syn::Path) -> TokenStream {
    quote! {
        #pk_persist_path::Properties
    }
}

#[inline]
pub(crate) fn property_(pk_persist_path: &syn::Path) -> TokenStream {
    quote! {
        #pk_persist_path::props::Property
    }
}

#[inline]
pub(crate) fn property_list_(pk_persist_path: &syn::Path) -> TokenStream {
    quote! {
        #pk_persist_path::props::PropertyList
    }
}

#[inline]
pub(crate) fn persist_kind_(pk_persist_path: &syn::Path) -> TokenStream {
    quote! {
        #pk_persist_path::ops::PersistKind
    }
}

#[inline]
pub(crate) fn persist_ref_(pk_persist_path: &syn::Path) -> TokenStream {
    quote! {
        #pk_persist_path::ops::PersistRef
    }
}

#[inline]
pub(crate) fn persist_mut_(pk_persist_path: &syn::Path) -> TokenStream {
    quote! {
        #pk_persist_path::ops::PersistMut
    }
}
