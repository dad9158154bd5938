use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use crate::derive_data::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A reflected field.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The reflected name, raw identifiers are unescaped.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// A struct with named fields, ready for code generation.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub(crate) fn from_derive_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`#[derive(Reflect)]` only supports structs with named fields",
                    ));
                }
            },
            Data::Enum(_) | Data::Union(_) => {
                return Err(syn::Error::new(
                    ast.ident.span(),
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
        };

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`#[derive(Reflect)]` does not support lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new(field.span(), "expected a named field"));
            };
            fields.push(StructField {
                ident,
                ty: &field.ty,
                attrs: FieldAttributes::parse(&field.attrs)?,
            });
        }

        Ok(Self {
            meta: ReflectMeta::new(&ast.ident, &ast.generics, attrs),
            fields,
        })
    }

    #[inline]
    pub(crate) fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields that are not `#[reflect(ignore)]`, in declaration order.
    pub(crate) fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.attrs.ignore)
    }
}
