use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed` trait.
///
/// `info_tokens` is an expression building the `TypeInfo`.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, info_tokens: TokenStream) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let typed_ = crate::path::typed_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(&quote!(#reflect_ + #typed_));

    let body = if meta.is_generic() {
        let cell_ = crate::path::generic_type_info_cell_(vc_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| #info_tokens)
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(vc_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| #info_tokens)
        }
    };

    quote! {
        impl #impl_generics #typed_ for #type_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #body
            }
        }
    }
}
