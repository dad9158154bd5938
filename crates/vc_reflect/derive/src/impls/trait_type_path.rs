use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `TypePath` trait.
///
/// Generic types format their parameters into a `GenericTypePathCell`,
/// e.g. `my_crate::Page<alloc::string::String, 10>`.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let type_path_ = crate::path::type_path_(vc_reflect_path);

    let type_ident = meta.type_ident();
    let ident_str = type_ident.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&type_path_);

    if !meta.is_generic() {
        return quote! {
            impl #impl_generics #type_path_ for #type_ident #ty_generics #where_clause {
                #[inline]
                fn type_path() -> &'static str {
                    ::core::concat!(::core::module_path!(), "::", #ident_str)
                }

                #[inline]
                fn type_name() -> &'static str {
                    #ident_str
                }
            }
        };
    }

    let cell_ = crate::path::generic_type_path_cell_(vc_reflect_path);
    let concat_ = crate::path::concat_(vc_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(vc_reflect_path);

    // One piece per parameter, separators are added below.
    let mut path_params = Vec::new();
    let mut name_params = Vec::new();
    for param in &meta.generics().params {
        match param {
            syn::GenericParam::Type(param) => {
                let ident = &param.ident;
                path_params.push(quote!(<#ident as #type_path_>::type_path()));
                name_params.push(quote!(<#ident as #type_path_>::type_name()));
            }
            syn::GenericParam::Const(param) => {
                let ident = &param.ident;
                let value = quote!(&#macro_exports_::ToString::to_string(&#ident));
                path_params.push(value.clone());
                name_params.push(value);
            }
            syn::GenericParam::Lifetime(_) => {}
        }
    }

    let path_pieces = interleave(path_params);
    let name_pieces = interleave(name_params);

    quote! {
        impl #impl_generics #type_path_ for #type_ident #ty_generics #where_clause {
            fn type_path() -> &'static str {
                static CELL: #cell_ = #cell_::new();
                CELL.get_or_insert::<Self>(|| {
                    #concat_(&[::core::module_path!(), "::", #ident_str, "<", #(#path_pieces,)* ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: #cell_ = #cell_::new();
                CELL.get_or_insert::<Self>(|| {
                    #concat_(&[#ident_str, "<", #(#name_pieces,)* ">"])
                })
            }
        }
    }
}

fn interleave(params: Vec<TokenStream>) -> Vec<TokenStream> {
    let mut pieces = Vec::with_capacity(params.len() * 2);
    for (index, param) in params.into_iter().enumerate() {
        if index > 0 {
            pieces.push(quote!(", "));
        }
        pieces.push(param);
    }
    pieces
}
