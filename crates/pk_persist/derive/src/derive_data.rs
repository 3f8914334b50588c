//! Provide some tools for parsing token stream.

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Path, Type};

use crate::PERSIST_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// PersistStruct

/// The validated shape of one `#[derive(Persist)]` input.
///
/// Only non-generic structs with named fields get this far; everything else
/// is rejected in [`PersistStruct::from_input`] with an error on the exact
/// construct the macro cannot handle.
pub(crate) struct PersistStruct<'a> {
    meta: PersistMeta<'a>,
    fields: Vec<StructField<'a>>,
}

pub(crate) struct PersistMeta<'a> {
    pk_persist_path: Path,
    ident: &'a Ident,
}

/// One persisted field, with its external name already settled.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The stable external name, after `rename` is applied.
    pub name: String,
}

impl<'a> PersistStruct<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`#[derive(Persist)]` only supports structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Persist)]` only supports structs",
                ));
            }
        };

        let Fields::Named(struct_fields) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`#[derive(Persist)]` needs named fields, properties are addressed by name",
            ));
        };

        if let Some(param) = ast.generics.params.first() {
            return Err(syn::Error::new(
                param.span(),
                "`#[derive(Persist)]` does not support generic types, \
                 the property list is a single static per type",
            ));
        }

        let mut fields: Vec<StructField> = Vec::with_capacity(struct_fields.named.len());

        for field in &struct_fields.named {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;

            if attrs.skip.is_some() {
                if let Some(rename) = &attrs.rename {
                    return Err(syn::Error::new(
                        rename.span(),
                        "a skipped field has no property name to replace",
                    ));
                }
                continue;
            }

            let ident = field.ident.as_ref().expect("named fields have idents");

            let (name, name_span) = match &attrs.rename {
                Some(lit) => (lit.value(), lit.span()),
                None => (ident.unraw().to_string(), ident.span()),
            };

            if name.is_empty() {
                return Err(syn::Error::new(name_span, "property names cannot be empty"));
            }

            if let Some(peer) = fields.iter().find(|peer| peer.name == name) {
                return Err(syn::Error::new(
                    name_span,
                    format!(
                        "the property name `{name}` is already used by the field `{}`",
                        peer.ident
                    ),
                ));
            }

            fields.push(StructField {
                ident,
                ty: &field.ty,
                name,
            });
        }

        Ok(Self {
            meta: PersistMeta {
                pk_persist_path: crate::path::pk_persist(),
                ident: &ast.ident,
            },
            fields,
        })
    }

    #[inline]
    pub fn meta(&self) -> &PersistMeta<'a> {
        &self.meta
    }

    /// The persisted fields in declaration order, skipped ones removed.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }
}

impl PersistMeta<'_> {
    #[inline]
    pub fn pk_persist_path(&self) -> &Path {
        &self.pk_persist_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// The `#[persist(...)]` attributes of one field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub skip: Option<Span>,
}

impl FieldAttributes {
    /// Collect every `#[persist(...)]` attribute of one field.
    ///
    /// Examples:
    /// - `#[persist(rename = "label")]`
    /// - `#[persist(skip)]`
    pub fn parse_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(PERSIST_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    this.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    this.skip = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"` or `skip`"))
                }
            })?;
        }

        Ok(this)
    }
}
