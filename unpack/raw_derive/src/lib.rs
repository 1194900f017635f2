/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
extern crate proc_macro;

mod annotation;

use annotation::{parse_endian_anno, EndianAnno};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derive `unpack::RawSize` for a `#[repr(C)]` struct.
///
/// Fields are laid out back to back in declaration order with no padding,
/// which is how fixed-layout firmware messages are defined. The byte order
/// comes from `#[raw_data(endian = "little" | "big" | "native")]` and is
/// propagated to nested layouts.
#[proc_macro_derive(RAWDATA, attributes(raw_data))]
pub fn derive_raw_data(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let has_repr = input.attrs.iter().any(|a| a.path().is_ident("repr"));
    if !has_repr {
        return Err(syn::Error::new_spanned(
            name,
            "RAWDATA can only be derived for #[repr(C)] structs",
        ));
    }

    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "RAWDATA cannot be derived for enums",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "RAWDATA cannot be derived for unions",
            ))
        }
    };

    let endian = match parse_endian_anno(&input.attrs)? {
        EndianAnno::Little => quote! { ::unpack::Endianness::Little },
        EndianAnno::Big => quote! { ::unpack::Endianness::Big },
        EndianAnno::Native => quote! { ::unpack::Endianness::Native },
    };

    // (成员访问表达式, 类型)
    let members: Vec<(TokenStream2, &syn::Type)> = match &data.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .map(|f| {
                let ident = f.ident.as_ref().expect("named field");
                (quote! { #ident }, &f.ty)
            })
            .collect(),
        Fields::Unnamed(fields) => fields
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let index = syn::Index::from(i);
                (quote! { #index }, &f.ty)
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    let sizes = members.iter().map(|(_, ty)| {
        quote! { <#ty as ::unpack::RawSize>::RAW_SIZE }
    });
    let raw_size = quote! { 0 #(+ #sizes)* };

    let reads: Vec<TokenStream2> = members
        .iter()
        .enumerate()
        .map(|(i, (_, ty))| {
            let var = format_ident!("__field{}", i);
            quote! {
                let #var = <#ty as ::unpack::RawSize>::from_bytes_with_endian(
                    &bytes[offset..offset + <#ty as ::unpack::RawSize>::RAW_SIZE],
                    endian,
                )?;
                offset += <#ty as ::unpack::RawSize>::RAW_SIZE;
            }
        })
        .collect();

    let vars: Vec<_> = (0..members.len())
        .map(|i| format_ident!("__field{}", i))
        .collect();
    let construct = match &data.fields {
        Fields::Named(_) => {
            let idents = members.iter().map(|(m, _)| m);
            quote! { Self { #(#idents: #vars),* } }
        }
        Fields::Unnamed(_) => quote! { Self ( #(#vars),* ) },
        Fields::Unit => quote! { Self },
    };

    let writes = members.iter().map(|(member, ty)| {
        quote! {
            <#ty as ::unpack::RawSize>::write_bytes_with_endian(
                &self.#member,
                &mut out[offset..offset + <#ty as ::unpack::RawSize>::RAW_SIZE],
                endian,
            )?;
            offset += <#ty as ::unpack::RawSize>::RAW_SIZE;
        }
    });

    Ok(quote! {
        impl ::unpack::RawSize for #name {
            const RAW_SIZE: usize = #raw_size;
            const ENDIAN: ::unpack::Endianness = #endian;

            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn from_bytes_with_endian(
                bytes: &[u8],
                endian: ::unpack::Endianness,
            ) -> ::std::result::Result<Self, ::unpack::RawError> {
                if bytes.len() < Self::RAW_SIZE {
                    return Err(::unpack::RawError::insufficient::<Self>(Self::RAW_SIZE, bytes.len()));
                }
                let mut offset = 0usize;
                #(#reads)*
                Ok(#construct)
            }

            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn write_bytes_with_endian(
                &self,
                out: &mut [u8],
                endian: ::unpack::Endianness,
            ) -> ::std::result::Result<(), ::unpack::RawError> {
                if out.len() < Self::RAW_SIZE {
                    return Err(::unpack::RawError::insufficient::<Self>(Self::RAW_SIZE, out.len()));
                }
                let mut offset = 0usize;
                #(#writes)*
                Ok(())
            }
        }
    })
}
