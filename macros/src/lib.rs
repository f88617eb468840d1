// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Fields};

/// Structs delegate to their only field, enum variants marked `#[truthy]`
/// read as true.
#[proc_macro_derive(ToBool, attributes(truthy))]
pub fn derive_to_bool(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(t) => t.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let DeriveInput {
        ident,
        mut generics,
        data,
        ..
    } = input;

    let body = match data {
        Data::Struct(s) => {
            let mut fields = s.fields.iter();
            let field = match (fields.next(), fields.next()) {
                (Some(field), None) => field,
                _ => {
                    return Err(syn::Error::new(
                        s.fields.span(),
                        "ToBool can be derived for a struct with exactly one field",
                    ))
                },
            };
            let field_ty = &field.ty;
            generics
                .make_where_clause()
                .predicates
                .push(syn::parse_quote! { #field_ty: ::monadic_control::ToBool });
            match &field.ident {
                Some(name) => quote! { ::monadic_control::ToBool::to_bool(&self.#name) },
                None => quote! { ::monadic_control::ToBool::to_bool(&self.0) },
            }
        },
        Data::Enum(e) => {
            let arms = e.variants.iter().map(|v| {
                let variant = &v.ident;
                let truthy = v.attrs.iter().any(|a| a.path.is_ident("truthy"));
                let pattern = match &v.fields {
                    Fields::Named(_) => quote! { #ident::#variant { .. } },
                    Fields::Unnamed(_) => quote! { #ident::#variant(..) },
                    Fields::Unit => quote! { #ident::#variant },
                };
                quote! { #pattern => #truthy, }
            });
            quote! {
                match *self {
                    #(#arms)*
                }
            }
        },
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "ToBool cannot be derived for a union",
            ))
        },
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::monadic_control::ToBool for #ident #ty_generics #where_clause {
            fn to_bool(&self) -> bool {
                #body
            }
        }
    })
}
