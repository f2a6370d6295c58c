use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Error, Expr, Ident, LitStr, Result, Token, Type, braced};

pub struct EntryEnum {
    pub name: Ident,
    pub variants: Vec<EntryVariant>,
}

pub struct EntryVariant {
    docs: Vec<Attribute>,
    message: LitStr,
    pub no_source: bool,
    pub name: Ident,
    pub fields: Vec<(Ident, Type)>,
    level: Expr,
}

impl Parse for EntryEnum {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse::<Ident>()?;

        let content;
        braced!(content in input);

        let mut variants = Vec::new();
        while !content.is_empty() {
            variants.push(content.parse::<EntryVariant>()?);
            if !content.is_empty() {
                content.parse::<Token![,]>()?;
            }
        }

        Ok(EntryEnum { name, variants })
    }
}

impl Parse for EntryVariant {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut docs = Vec::new();
        let mut message = None;
        let mut no_source = false;

        for attribute in input.call(Attribute::parse_outer)? {
            if attribute.path().is_ident("doc") {
                docs.push(attribute);
            } else if attribute.path().is_ident("error") {
                message = Some(attribute.parse_args::<LitStr>()?);
            } else if attribute.path().is_ident("no_source") {
                no_source = true;
            } else {
                return Err(Error::new_spanned(attribute, "unsupported attribute"));
            }
        }

        let name = input.parse::<Ident>()?;
        let message = message
            .ok_or_else(|| Error::new(name.span(), "missing #[error(...)] attribute"))?;

        let mut fields = Vec::new();
        if input.peek(syn::token::Brace) {
            let content;
            braced!(content in input);

            while !content.is_empty() {
                let field_name = content.parse::<Ident>()?;
                content.parse::<Token![:]>()?;
                let field_type = content.parse::<Type>()?;
                fields.push((field_name, field_type));

                if !content.is_empty() {
                    content.parse::<Token![,]>()?;
                }
            }
        }

        input.parse::<Token![=>]>()?;
        let level = input.parse::<Expr>()?;

        Ok(EntryVariant {
            docs,
            message,
            no_source,
            name,
            fields,
            level,
        })
    }
}

impl EntryVariant {
    /// The variant as it appears inside the generated enum.
    pub fn definition(&self, keep_source: bool) -> TokenStream {
        let docs = &self.docs;
        let message = &self.message;
        let name = &self.name;
        let fields = self.fields.iter().map(|(field, ty)| quote! { #field: #ty });

        if keep_source {
            quote! {
                #(#docs)*
                #[error(#message)]
                #name { #(#fields,)* err: String }
            }
        } else if self.fields.is_empty() {
            quote! {
                #(#docs)*
                #[error(#message)]
                #name
            }
        } else {
            quote! {
                #(#docs)*
                #[error(#message)]
                #name { #(#fields),* }
            }
        }
    }

    pub fn level_arm(&self, keep_source: bool) -> TokenStream {
        let name = &self.name;
        let level = &self.level;

        if keep_source || !self.fields.is_empty() {
            quote! { Self::#name { .. } => #level }
        } else {
            quote! { Self::#name => #level }
        }
    }
}
