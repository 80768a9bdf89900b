//! Procedural macros for typed-action

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(struct_any, enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Prepended to every tag, e.g. `"todo/"`
    #[darling(default)]
    prefix: Option<String>,

    /// Explicit tag for a struct action
    #[darling(default)]
    tag: Option<String>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,

    /// Explicit tag override
    #[darling(default)]
    tag: Option<String>,
}

/// Convert PascalCase to snake_case, keeping acronyms together
///
/// `SetStatus` -> `set_status`, `HTTPRequestSent` -> `http_request_sent`
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_uppercase() && next.is_some_and(|n| n.is_lowercase()),
            };
            if boundary {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Derive macro for the Action trait
///
/// Generates `name()` returning the action's tag, plus an inherent
/// `tags() -> &'static [&'static str]` listing every tag the type can carry.
///
/// Tags default to the snake_case variant (or struct) name.
///
/// - `#[action(prefix = "todo/")]` on the type prepends a prefix to every tag
/// - `#[action(tag = "...")]` on a variant, or on a struct, sets the tag explicitly
///
/// Use it through the `typed-action` crate, whose crate-level docs carry a
/// compiled example.
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;
    let prefix = opts.prefix.as_deref().unwrap_or_default();
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let (name_body, tags): (proc_macro2::TokenStream, Vec<String>) = match &opts.data {
        darling::ast::Data::Enum(variants) => {
            if opts.tag.is_some() {
                return syn::Error::new_spanned(
                    &input.ident,
                    "`tag` on an enum belongs on its variants; use `prefix` on the enum",
                )
                .to_compile_error()
                .into();
            }

            let tags: Vec<String> = variants
                .iter()
                .map(|v| {
                    let base = v
                        .tag
                        .clone()
                        .unwrap_or_else(|| to_snake_case(&v.ident.to_string()));
                    format!("{prefix}{base}")
                })
                .collect();

            let arms = variants.iter().zip(&tags).map(|(v, tag)| {
                let variant = &v.ident;
                quote! { #name::#variant { .. } => #tag }
            });

            let body = if variants.is_empty() {
                quote! { match *self {} }
            } else {
                quote! {
                    match self {
                        #(#arms),*
                    }
                }
            };
            (body, tags)
        }
        darling::ast::Data::Struct(_) => {
            let base = opts
                .tag
                .clone()
                .unwrap_or_else(|| to_snake_case(&name.to_string()));
            let tag = format!("{prefix}{base}");
            (quote! { #tag }, vec![tag])
        }
    };

    let expanded = quote! {
        impl #impl_generics typed_action::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #name_body
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Every tag this action type can carry, in declaration order
            pub fn tags() -> &'static [&'static str] {
                &[#(#tags),*]
            }
        }
    };

    TokenStream::from(expanded)
}
