use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, reflect_kind_token: TokenStream) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let typed_ = crate::path::typed_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(&quote!(#reflect_ + #typed_));

    quote! {
        impl #impl_generics #reflect_ for #type_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }
        }
    }
}
