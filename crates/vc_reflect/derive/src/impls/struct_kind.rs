use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectStruct;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, struct_info_tokens(info));

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Struct));

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate the `TypeInfo::Struct(..)` expression.
fn struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let struct_info_ = crate::path::struct_info_(vc_reflect_path);
    let named_field_ = crate::path::named_field_(vc_reflect_path);
    let field_tags_ = crate::path::field_tags_(vc_reflect_path);

    let fields = info.active_fields().map(|field| {
        let ty = field.ty;
        let name = field.name();
        if field.attrs.tags.is_empty() {
            quote!(#named_field_::new::<#ty>(#name))
        } else {
            let keys = field.attrs.tags.iter().map(|(key, _)| key);
            let values = field.attrs.tags.iter().map(|(_, value)| value);
            quote! {
                #named_field_::new::<#ty>(#name)
                    .with_tags(#field_tags_::new(&[#((#keys, #values)),*]))
            }
        }
    });

    let text_tokens = if meta.attrs().text {
        quote!(.with_marshal_text::<Self>())
    } else {
        TokenStream::new()
    };

    quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[#(#fields),*])
                #text_tokens
        )
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let vc_reflect_path = meta.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let typed_ = crate::path::typed_(vc_reflect_path);

    let idents: Vec<_> = info.active_fields().map(|field| field.ident).collect();
    let names: Vec<String> = info.active_fields().map(|field| field.name()).collect();
    let indices: Vec<usize> = (0..idents.len()).collect();
    let field_len = idents.len();

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(&quote!(#reflect_ + #typed_));

    quote! {
        impl #impl_generics #struct_ for #type_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#indices => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}
