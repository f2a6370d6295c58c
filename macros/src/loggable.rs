use crate::emit::log_methods;
use crate::entry::EntryEnum;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, parse_macro_input};

pub fn loggable_impl(input: TokenStream) -> TokenStream {
    let EntryEnum { name, variants } = parse_macro_input!(input as EntryEnum);

    if let Some(variant) = variants.iter().find(|variant| variant.no_source) {
        return Error::new(variant.name.span(), "#[no_source] only applies to traceable!")
            .to_compile_error()
            .into();
    }

    let definitions = variants.iter().map(|variant| variant.definition(false));
    let level_arms = variants.iter().map(|variant| variant.level_arm(false));
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

            #log_methods
        }
    }
    .into()
}
