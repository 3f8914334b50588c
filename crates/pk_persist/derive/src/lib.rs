//! See following macros:
//!
//! - [`Persist`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::derive_data::PersistStruct;

static PERSIST_ATTRIBUTE_NAME: &str = "persist";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Full Persistence Derivation
///
/// `#[derive(Persist)]` automatically implements the following traits:
///
/// - `Persist`
/// - `Properties`
///
/// Together they make the type composite: the walk engine recurses into it
/// and stores one named entry per declared property, in declaration order.
///
/// The type must be a non-generic struct with named fields. Every persisted
/// field type must implement `Persist` itself, either as another derived
/// composite or as one of the native leaf types; a field type that is
/// neither fails to compile at its property declaration. `Properties`
/// requires `Default`, so keep a `Default` derive or impl next to it.
///
/// ```rust, ignore
/// #[derive(Persist, Default)]
/// struct Monitor {
///     label: String,
///     width: u32,
/// }
/// ```
///
/// ## Stable Names
///
/// The archive entry name defaults to the field name. The `rename`
/// attribute pins it down independently, so the Rust field can be renamed
/// later without breaking documents stored under the old name:
///
/// ```rust, ignore
/// #[derive(Persist, Default)]
/// struct Monitor {
///     #[persist(rename = "label")]
///     display_label: String,
///     width: u32,
/// }
/// ```
///
/// Two properties of one type must not share a name. The macro rejects such
/// declarations with an error on the clashing name.
///
/// This attribute can only be applied at the field level.
///
/// ## Skipping Fields
///
/// The `skip` attribute removes a field from the property list entirely.
/// The field is never stored, and on load it keeps whatever `Default` put
/// there:
///
/// ```rust, ignore
/// #[derive(Persist, Default)]
/// struct Monitor {
///     width: u32,
///     #[persist(skip)]
///     dirty: bool,
/// }
/// ```
///
/// A skipped field type does not need to implement `Persist`.
///
/// This attribute can only be applied at the field level.
///
/// ## Generic Types
///
/// Generic types are not supported: the property list is one `static` per
/// type, which a generic type cannot provide. Implement `Persist` and
/// `Properties` by hand for each concrete instantiation instead.
#[proc_macro_derive(Persist, attributes(persist))]
pub fn derive_persist(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    // Parse fields and their attributes, then reject unsupported shapes.
    let info = match PersistStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let persist_impls = impls::impl_composite(&info);

    TokenStream::from(quote! {
        const _: () = {
            #persist_impls
        };
    })
}
