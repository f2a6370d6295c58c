use proc_macro2::TokenStream;
use quote::quote;

/// Dispatches one `tracing` event on a runtime `tracing::Level`.
pub fn by_level(level: TokenStream, args: TokenStream) -> TokenStream {
    quote! {
        {
            let level = #level;
            if level == tracing::Level::ERROR {
                tracing::error!(#args)
            } else if level == tracing::Level::WARN {
                tracing::warn!(#args)
            } else if level == tracing::Level::INFO {
                tracing::info!(#args)
            } else if level == tracing::Level::DEBUG {
                tracing::debug!(#args)
            } else {
                tracing::trace!(#args)
            }
        }
    }
}

pub fn log_methods() -> TokenStream {
    let plain = by_level(quote! { self.level() }, quote! { "{}", message });
    let with_context = by_level(
        quote! { self.level() },
        quote! { message = %message, context = %context },
    );

    quote! {
        #[allow(dead_code)]
        pub fn log(&self) {
            let message = self.to_string();
            #plain
        }

        #[allow(dead_code)]
        pub fn log_with_context<T: std::fmt::Display>(&self, context: T) {
            let message = self.to_string();
            #with_context
        }
    }
}
