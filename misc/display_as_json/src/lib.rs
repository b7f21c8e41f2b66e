//! `#[derive(Display)]` writing the value as compact JSON through `serde_json`.
//!
//! The deriving crate must depend on `serde` and `serde_json`. A serialization failure is
//! written out as text instead of failing the formatter.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, DeriveInput, GenericParam};

#[proc_macro_derive(Display)]
pub fn display_as_json_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impl_display(ast).into()
}

fn impl_display(mut ast: DeriveInput) -> TokenStream2 {
    let name = &ast.ident;

    // every type parameter has to be serializable for the value to be
    let type_params: Vec<_> = ast
        .generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(type_param.ident.clone()),
            _ => None,
        })
        .collect();
    let where_clause = ast.generics.make_where_clause();
    for ident in type_params {
        where_clause
            .predicates
            .push(parse_quote! { #ident: serde::Serialize });
    }

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    quote! {
        impl #impl_generics std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match serde_json::to_string(self) {
                    Ok(json) => write!(f, "{}", json),
                    Err(e) => write!(f, "Error serializing {}: {}", stringify!(#name), e),
                }
            }
        }
    }
}
