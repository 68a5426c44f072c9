// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `#[derive(EnumType)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Lit, Meta};

/// Parsed `#[enum_type(...)]` attributes.
#[derive(Default)]
struct EnumTypeAttrs {
    /// Override the reported enum name
    name: Option<String>,
}

impl EnumTypeAttrs {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = EnumTypeAttrs::default();

        for attr in attrs {
            if !attr.path().is_ident("enum_type") {
                continue;
            }
            let nested = attr.parse_args_with(
                syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
            )?;
            for meta in nested {
                match meta {
                    Meta::NameValue(nv) if nv.path.is_ident("name") => {
                        if let syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(lit_str),
                            ..
                        }) = &nv.value
                        {
                            result.name = Some(lit_str.value());
                        } else {
                            return Err(syn::Error::new_spanned(
                                &nv.value,
                                "expected a string literal",
                            ));
                        }
                    }
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "unknown enum_type attribute, expected `name = \"...\"`",
                        ));
                    }
                }
            }
        }

        Ok(result)
    }
}

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "EnumType can only be derived for enums",
            ));
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "EnumType needs at least one variant",
        ));
    }

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "EnumType variants must not carry fields",
            ));
        }
    }

    let attrs = EnumTypeAttrs::from_attrs(&input.attrs)?;
    let ident = &input.ident;
    let name = attrs.name.unwrap_or_else(|| ident.to_string());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants: Vec<_> = data.variants.iter().map(|v| &v.ident).collect();
    let names: Vec<String> = variants.iter().map(|v| v.to_string()).collect();

    Ok(quote! {
        impl #impl_generics ::guardclause::EnumType for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const VARIANT_NAMES: &'static [&'static str] = &[#(#names),*];
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            fn discriminant(&self) -> i64 {
                match *self {
                    #(Self::#variants => Self::#variants as i64,)*
                }
            }

            fn variant_name(&self) -> &'static str {
                match *self {
                    #(Self::#variants => #names,)*
                }
            }
        }
    })
}
