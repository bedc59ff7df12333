//! # Regman Macros
//!
//! Procedural macros for registrable types.
//!
//! ## Available Macros
//!
//! - `#[derive(Symbol)]` - Give a type its declared name for key-less registration

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, DeriveInput};

/// Symbol derive arguments.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(symbol), supports(struct_any, enum_any))]
struct SymbolArgs {
    ident: syn::Ident,
    generics: syn::Generics,
    #[darling(default)]
    name: Option<String>,
    #[darling(default, rename = "crate")]
    krate: Option<syn::Path>,
}

/// Implement `Symbol` for a struct or enum.
///
/// The symbol name is the type's identifier unless overridden with
/// `#[symbol(name = "...")]`. Code that depends on `regman-core` directly
/// instead of the `regman` facade points the impl at it with
/// `#[symbol(crate = "regman_core")]`.
///
/// # Example
///
/// ```ignore
/// use regman::Symbol;
///
/// #[derive(Clone, Symbol)]
/// struct JsonExporter;
///
/// #[derive(Clone, Symbol)]
/// #[symbol(name = "csv")]
/// struct CsvExporter;
///
/// assert_eq!(JsonExporter.symbol_name(), "JsonExporter");
/// assert_eq!(CsvExporter.symbol_name(), "csv");
/// ```
#[proc_macro_derive(Symbol, attributes(symbol))]
pub fn derive_symbol(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let args = match SymbolArgs::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    let type_name = &args.ident;
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| type_name.unraw().to_string());

    if name.is_empty() {
        return syn::Error::new_spanned(type_name, "symbol name must not be empty")
            .to_compile_error()
            .into();
    }

    let krate = args
        .krate
        .clone()
        .unwrap_or_else(|| syn::parse_quote!(::regman));
    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    let expanded: proc_macro2::TokenStream = quote! {
        impl #impl_generics #krate::Symbol for #type_name #ty_generics #where_clause {
            fn symbol_name(&self) -> &str {
                #name
            }
        }
    };

    TokenStream::from(expanded)
}
