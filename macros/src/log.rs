use crate::emit::by_level;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Token, parse_macro_input};

struct LogInput {
    entry: Expr,
    context: Option<Expr>,
}

impl Parse for LogInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let entry = input.parse::<Expr>()?;

        let context = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };

        Ok(LogInput { entry, context })
    }
}

pub fn log_impl(input: TokenStream) -> TokenStream {
    let LogInput { entry, context } = parse_macro_input!(input as LogInput);

    let event = match &context {
        Some(context) => {
            let dispatch = by_level(
                quote! { entry.level() },
                quote! { message = %message, context = %context },
            );
            quote! {
                let context = #context;
                #dispatch
            }
        }
        None => by_level(quote! { entry.level() }, quote! { "{}", message }),
    };

    quote! {
        {
            let entry = &(#entry);
            let message = entry.to_string();
            #event
        }
    }
    .into()
}
