//! Derive macro for the structmap `Record` trait.
//!
//! `#[derive(Record)]` on a struct with named fields generates two impls:
//!
//! - `Record`, exposing the field descriptor list (declared name, tag
//!   table, value handle), in declaration order
//! - `Reflect`, so the type can appear nested inside other records,
//!   sequences, and maps
//!
//! Per-field annotations use the `#[tags(...)]` helper attribute, whose
//! entries map a tag namespace to a raw tag string:
//!
//! ```rust,ignore
//! #[derive(Record)]
//! struct Server {
//!     #[tags(structmap = "server_name,omitempty", json = "serverName")]
//!     name: String,
//! }
//! ```
//!
//! Tuple structs, enums, and unions are rejected with a compile error;
//! unit structs derive to an empty field list. Generic structs are
//! supported; every type parameter gains a `Reflect` bound.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Expr, ExprLit, Fields, Lit, MetaNameValue,
    Token,
};

#[proc_macro_derive(Record, attributes(tags))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Record cannot be derived for tuple structs; fields must be named",
                ))
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record cannot be derived for enums",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record cannot be derived for unions",
            ))
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut leaf_entries = Vec::with_capacity(fields.len());

    for field in &fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let name = ident.unraw().to_string();
        let tags = tag_entries(&field.attrs)?;
        let namespaces = tags.iter().map(|(ns, _)| ns);
        let raw_tags = tags.iter().map(|(_, raw)| raw);

        descriptors.push(quote! {
            ::structmap::Field::new(
                #name,
                &[#((#namespaces, #raw_tags)),*],
                &self.#ident,
            )
        });
        leaf_entries.push(quote! {
            map.insert(
                ::std::string::String::from(#name),
                ::structmap::Reflect::leaf(&self.#ident),
            );
        });
    }

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::structmap::Reflect));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::structmap::Record for #ident #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::structmap::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        #[automatically_derived]
        impl #impl_generics ::structmap::Reflect for #ident #ty_generics #where_clause {
            fn leaf(&self) -> ::structmap::Value {
                let mut map = ::structmap::Map::new();
                #(#leaf_entries)*
                ::structmap::Value::Object(map)
            }

            fn reflect(&self, options: &::structmap::MapOptions) -> ::structmap::Value {
                ::structmap::Value::Object(::structmap::expand(
                    &::structmap::Record::fields(self),
                    options,
                ))
            }

            fn is_empty(&self) -> bool {
                ::structmap::Record::fields(self)
                    .iter()
                    .all(|field| ::structmap::Reflect::is_empty(field.value()))
            }
        }
    })
}

/// Collects `(namespace, raw tag)` pairs from a field's `#[tags(...)]`
/// attributes.
fn tag_entries(attrs: &[syn::Attribute]) -> syn::Result<Vec<(String, String)>> {
    let mut entries = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("tags") {
            continue;
        }

        let pairs =
            attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        for pair in pairs {
            let namespace = pair
                .path
                .get_ident()
                .ok_or_else(|| {
                    syn::Error::new_spanned(&pair.path, "tag namespace must be an identifier")
                })?
                .unraw()
                .to_string();

            let raw = match &pair.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => lit.value(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "tag value must be a string literal, e.g. #[tags(structmap = \"name,omitempty\")]",
                    ))
                }
            };

            entries.push((namespace, raw));
        }
    }

    Ok(entries)
}
