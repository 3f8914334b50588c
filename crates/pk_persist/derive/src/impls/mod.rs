use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::PersistStruct;

// -----------------------------------------------------------------------------
// Modules

mod trait_persist;
mod trait_properties;

// -----------------------------------------------------------------------------
// Internal API

use trait_persist::impl_trait_persist;
use trait_properties::impl_trait_properties;

/// Implement full persistence for a struct type.
pub(crate) fn impl_composite(info: &PersistStruct) -> TokenStream {
    // trait: Persist
    let persist_trait_tokens = impl_trait_persist(info.meta());

    // trait: Properties
    let properties_trait_tokens = impl_trait_properties(info);

    quote! {
        #persist_trait_tokens

        #properties_trait_tokens
    }
}
