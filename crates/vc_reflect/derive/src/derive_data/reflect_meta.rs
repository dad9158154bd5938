use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident};

use crate::derive_data::TypeAttributes;

/// Metadata shared by all generated impls.
pub(crate) struct ReflectMeta<'a> {
    type_ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    vc_reflect_path: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    pub(crate) fn new(type_ident: &'a Ident, generics: &'a Generics, attrs: TypeAttributes) -> Self {
        Self {
            type_ident,
            generics,
            attrs,
            vc_reflect_path: crate::path::vc_reflect(),
        }
    }

    #[inline]
    pub(crate) fn type_ident(&self) -> &Ident {
        self.type_ident
    }

    #[inline]
    pub(crate) fn generics(&self) -> &Generics {
        self.generics
    }

    #[inline]
    pub(crate) fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub(crate) fn vc_reflect_path(&self) -> &syn::Path {
        &self.vc_reflect_path
    }

    /// Returns `true` if the type has type or const parameters.
    pub(crate) fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }

    /// Returns `(impl_generics, ty_generics, where_clause)`.
    ///
    /// Every type parameter is bounded by `bounds`, the user's where clause is kept.
    pub(crate) fn split_generics(
        &self,
        bounds: &TokenStream,
    ) -> (syn::ImplGenerics<'_>, syn::TypeGenerics<'_>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let bounded: Vec<TokenStream> = self
            .generics
            .type_params()
            .map(|param| {
                let ident = &param.ident;
                quote!(#ident: #bounds)
            })
            .collect();
        let predicates = where_clause.map(|clause| &clause.predicates);

        let where_tokens = if bounded.is_empty() && predicates.is_none() {
            TokenStream::new()
        } else {
            quote! { where #(#bounded,)* #predicates }
        };

        (impl_generics, ty_generics, where_tokens)
    }
}
