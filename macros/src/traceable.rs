use crate::emit::log_methods;
use crate::entry::{EntryEnum, EntryVariant};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse_macro_input;

pub fn traceable_impl(input: TokenStream) -> TokenStream {
    let EntryEnum { name, variants } = parse_macro_input!(input as EntryEnum);

    let definitions = variants
        .iter()
        .map(|variant| variant.definition(!variant.no_source));
    let level_arms = variants
        .iter()
        .map(|variant| variant.level_arm(!variant.no_source));
    let constructors = variants.iter().filter_map(constructor);
    let log_methods = log_methods();

    quote! {
        #[allow(dead_code)]
        #[derive(Debug, Clone, PartialEq, thiserror::Error, serde::Serialize, serde::Deserialize)]
        pub enum #name {
            #(#definitions,)*
        }

        impl #name {
            #[allow(dead_code)]
            pub fn level(&self) -> tracing::Level {
                match self {
                    #(#level_arms,)*
                }
            }

            #(#constructors)*

            #log_methods
        }
    }
    .into()
}

// Unit variants are already values; everything else gets a positional constructor
// named after the variant, taking the cause last.
fn constructor(variant: &EntryVariant) -> Option<TokenStream2> {
    if variant.no_source && variant.fields.is_empty() {
        return None;
    }

    let name = &variant.name;
    let params = variant
        .fields
        .iter()
        .map(|(field, ty)| quote! { #field: impl Into<#ty> });
    let assignments = variant
        .fields
        .iter()
        .map(|(field, _)| quote! { #field: #field.into() });

    let constructor = if variant.no_source {
        quote! {
            #[allow(dead_code, non_snake_case)]
            pub fn #name(#(#params),*) -> Self {
                Self::#name { #(#assignments),* }
            }
        }
    } else {
        quote! {
            #[allow(dead_code, non_snake_case)]
            pub fn #name(#(#params,)* source: impl std::fmt::Display) -> Self {
                Self::#name { #(#assignments,)* err: source.to_string() }
            }
        }
    };

    Some(constructor)
}
