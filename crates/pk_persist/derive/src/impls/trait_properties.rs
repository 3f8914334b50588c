use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::derive_data::PersistStruct;

/// Generate implementation code for `Properties` trait.
///
/// The list is two statics behind the trait method, built from one accessor
/// pair per persisted field. Accessor functions are named by property index,
/// field names could collide after the `_mut` suffix is appended.
///
/// Name collisions between properties are checked again by
/// `PropertyList::new` during const evaluation, which also covers lists
/// written by hand.
pub(crate) fn impl_trait_properties(info: &PersistStruct) -> TokenStream {
    let meta = info.meta();
    let pk_persist_path = meta.pk_persist_path();

    let persist_ = crate::path::persist_(pk_persist_path);
    let properties_ = crate::path::properties_(pk_persist_path);
    let property_ = crate::path::property_(pk_persist_path);
    let property_list_ = crate::path::property_list_(pk_persist_path);

    let ident = meta.ident();
    let field_count = info.fields().len();

    let accessors = info.fields().iter().enumerate().map(|(index, field)| {
        let field_ident = field.ident;
        let get = format_ident!("property_{index}");
        let get_mut = format_ident!("property_{index}_mut");

        quote! {
            fn #get(owner: &#ident) -> &dyn #persist_ {
                &owner.#field_ident
            }

            fn #get_mut(owner: &mut #ident) -> &mut dyn #persist_ {
                &mut owner.#field_ident
            }
        }
    });

    let descriptors = info.fields().iter().enumerate().map(|(index, field)| {
        let name = &field.name;
        let ty = field.ty;
        let get = format_ident!("property_{index}");
        let get_mut = format_ident!("property_{index}_mut");

        quote! {
            #property_::new::<#ty>(#name, #get, #get_mut)
        }
    });

    quote! {
        #(#accessors)*

        impl #properties_ for #ident {
            fn properties() -> &'static #property_list_<Self> {
                static PROPERTIES: [#property_<#ident>; #field_count] = [
                    #(#descriptors,)*
                ];

                static LIST: #property_list_<#ident> = #property_list_::new(&PROPERTIES);

                &LIST
            }
        }
    }
}
