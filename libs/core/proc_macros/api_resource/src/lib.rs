//! `ApiResource` derive macro.
//!
//! Implements `core_proc_macros::ApiResource` for a named struct, deriving the
//! collection, route prefix, OpenAPI tag and message label from the struct name
//! unless overridden.
//!
//! ```ignore
//! use core_proc_macros::ApiResource;
//!
//! #[derive(ApiResource)]
//! pub struct Enquiry {
//!     status: String,
//! }
//!
//! assert_eq!(Enquiry::COLLECTION, "enquiries");
//! assert_eq!(Enquiry::URL, "/enquiries");
//! assert_eq!(Enquiry::TAG, "Enquiries");
//! assert_eq!(Enquiry::LABEL, "Enquiry");
//! assert_eq!(Enquiry::ENVELOPE, "data");
//! ```
//!
//! ```ignore
//! #[derive(ApiResource)]
//! #[api_resource(collection = "query", tag = "Queries", envelope = "data")]
//! pub struct Query {
//!     email: String,
//! }
//!
//! assert_eq!(Query::URL, "/query");
//! ```

extern crate proc_macro;

use darling::FromDeriveInput;
use pluralizer::pluralize;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

const ENVELOPES: [&str; 2] = ["data", "result"];

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(api_resource), supports(struct_named))]
struct ApiResourceInput {
    ident: syn::Ident,
    #[darling(default)]
    collection: Option<String>,
    #[darling(default)]
    url: Option<String>,
    #[darling(default)]
    tag: Option<String>,
    #[darling(default)]
    label: Option<String>,
    #[darling(default)]
    envelope: Option<String>,
}

/// Derives `core_proc_macros::ApiResource`.
///
/// # Attributes
///
/// - `collection`: collection name (default: pluralized lowercase struct name)
/// - `url`: route prefix (default: `/<collection>`)
/// - `tag`: OpenAPI tag (default: capitalized collection)
/// - `label`: singular name used in response messages (default: struct name)
/// - `envelope`: write response key, `"data"` or `"result"` (default: `"data"`)
///
/// Only named structs are supported.
#[proc_macro_derive(ApiResource, attributes(api_resource))]
pub fn api_resource_derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);
    ApiResourceInput::from_derive_input(&ast)
        .and_then(impl_api_resource)
        .unwrap_or_else(|err| err.write_errors())
        .into()
}

fn capitalize_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn impl_api_resource(receiver: ApiResourceInput) -> darling::Result<proc_macro2::TokenStream> {
    let ident = &receiver.ident;
    let name = ident.to_string().to_lowercase();

    let collection = receiver
        .collection
        .unwrap_or_else(|| pluralize(&name, 2, false));

    let url = receiver.url.unwrap_or_else(|| format!("/{collection}"));
    if !url.starts_with('/') {
        return Err(darling::Error::custom("url must start with '/'").with_span(ident));
    }

    let tag = receiver
        .tag
        .unwrap_or_else(|| capitalize_first_letter(&collection));
    let label = receiver.label.unwrap_or_else(|| ident.to_string());

    let envelope = receiver.envelope.unwrap_or_else(|| ENVELOPES[0].to_string());
    if !ENVELOPES.contains(&envelope.as_str()) {
        return Err(darling::Error::custom(format!(
            "envelope must be one of {ENVELOPES:?}, got {envelope:?}"
        ))
        .with_span(ident));
    }

    Ok(quote! {
        impl core_proc_macros::ApiResource for #ident {
            const URL: &'static str = #url;
            const COLLECTION: &'static str = #collection;
            const TAG: &'static str = #tag;
            const LABEL: &'static str = #label;
            const ENVELOPE: &'static str = #envelope;
        }
    })
}
