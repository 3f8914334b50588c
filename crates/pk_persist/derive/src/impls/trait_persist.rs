use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::PersistMeta;

/// Generate implementation code for `Persist` trait.
///
/// Everything here is the composite side of the kind dispatch; the leaf
/// side lives in `pk_persist` itself and is never derived.
pub(crate) fn impl_trait_persist(meta: &PersistMeta) -> TokenStream {
    let pk_persist_path = meta.pk_persist_path();

    let persist_ = crate::path::persist_(pk_persist_path);
    let macro_utils_ = crate::path::macro_utils_(pk_persist_path);
    let persist_kind_ = crate::path::persist_kind_(pk_persist_path);
    let persist_ref_ = crate::path::persist_ref_(pk_persist_path);
    let persist_mut_ = crate::path::persist_mut_(pk_persist_path);

    let ident = meta.ident();
    let ident_name = ident.to_string();

    quote! {
        impl #persist_ for #ident {
            #[inline]
            fn type_path(&self) -> &'static str {
                ::core::concat!(::core::module_path!(), "::", #ident_name)
            }

            fn set(&mut self, value: #macro_utils_::Box<dyn #persist_>) -> ::core::result::Result<(), #macro_utils_::Box<dyn #persist_>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn persist_kind(&self) -> #persist_kind_ {
                #persist_kind_::Composite
            }

            #[inline]
            fn persist_ref(&self) -> #persist_ref_<'_> {
                #persist_ref_::Composite(self)
            }

            #[inline]
            fn persist_mut(&mut self) -> #persist_mut_<'_> {
                #persist_mut_::Composite(self)
            }
        }
    }
}
