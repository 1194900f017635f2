/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use syn::{Attribute, Meta};

/// Byte order requested through `#[raw_data(endian = "...")]`.
pub enum EndianAnno {
    Little,
    Big,
    Native,
}

/// 解析 #[raw_data(endian = "little")]
///
/// Unknown values are reported as a compile error on the attribute.
pub fn parse_endian_anno(attrs: &[Attribute]) -> syn::Result<EndianAnno> {
    let mut endian = EndianAnno::Native;

    for attr in attrs {
        if !attr.path().is_ident("raw_data") {
            continue;
        }
        let metas = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in metas {
            let Meta::NameValue(nv) = meta else {
                return Err(syn::Error::new_spanned(meta, "expected `endian = \"...\"`"));
            };
            if !nv.path.is_ident("endian") {
                return Err(syn::Error::new_spanned(
                    &nv.path,
                    "unsupported raw_data attribute",
                ));
            }
            let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(s),
                ..
            }) = &nv.value
            else {
                return Err(syn::Error::new_spanned(&nv.value, "endian must be a string"));
            };
            endian = match s.value().as_str() {
                "little" => EndianAnno::Little,
                "big" => EndianAnno::Big,
                "native" => EndianAnno::Native,
                other => {
                    return Err(syn::Error::new_spanned(
                        s,
                        format!("unknown endian `{}`", other),
                    ))
                }
            };
        }
    }
    Ok(endian)
}
