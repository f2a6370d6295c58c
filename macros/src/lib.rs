mod emit;
mod entry;
mod log;
mod loggable;
mod traceable;

use proc_macro::TokenStream;

/// Emits a loggable entry at its own level: `log!(entry)` or `log!(entry, context)`.
#[proc_macro]
pub fn log(input: TokenStream) -> TokenStream {
    log::log_impl(input)
}

/// Declares an entry enum whose variants carry no underlying cause.
#[proc_macro]
pub fn loggable(input: TokenStream) -> TokenStream {
    loggable::loggable_impl(input)
}

/// Declares an error enum whose variants keep the stringified cause in `err`,
/// unless marked `#[no_source]`.
#[proc_macro]
pub fn traceable(input: TokenStream) -> TokenStream {
    traceable::traceable_impl(input)
}
