use quote::ToTokens;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Token, punctuated::Punctuated};

// 拆分属性：返回 (非 derive 属性, 已声明的 derive 路径)
fn partition_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut others = Vec::new();
    let mut declared = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("derive") {
            others.push(attr.clone());
            continue;
        }
        if let Ok(list) = attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
        {
            declared.extend(list);
        }
    }
    (others, declared)
}

// 归一化 derive 名称，`Serialize` 与 `serde::Serialize` 视为同一项
fn derive_name(path: &syn::Path) -> String {
    match path.segments.last() {
        Some(seg) => seg.ident.to_string(),
        None => path.to_token_stream().to_string(),
    }
}

/// 将宏要求的 derive 与用户已写的 derive 合并为单个 `#[derive(...)]`，
/// 去重时以宏要求的路径为准。
pub(crate) fn merge_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (others, declared) = partition_derives(attrs);

    let mut seen = std::collections::HashSet::new();
    let merged: Vec<syn::Path> = required
        .into_iter()
        .chain(declared)
        .filter(|p| seen.insert(derive_name(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(others).collect();
}

/// 宏参数：`debug = true|false`，控制是否自动派生 `Debug`（默认 true）
#[derive(Default)]
pub(crate) struct DeriveConfig {
    pub(crate) debug: Option<bool>,
}

impl DeriveConfig {
    pub(crate) fn wants_debug(&self) -> bool {
        self.debug.unwrap_or(true)
    }
}

impl Parse for DeriveConfig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut cfg = Self::default();
        let pairs: Punctuated<syn::MetaNameValue, Token![,]> =
            Punctuated::parse_terminated(input)?;

        for kv in pairs {
            if !kv.path.is_ident("debug") {
                return Err(syn::Error::new(
                    kv.path.span(),
                    "unknown key in attribute; expected 'debug'",
                ));
            }
            if cfg.debug.is_some() {
                return Err(syn::Error::new(kv.span(), "duplicate key 'debug' in attribute"));
            }
            match kv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Bool(b),
                    ..
                }) => cfg.debug = Some(b.value()),
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "expected boolean literal for 'debug'",
                    ));
                }
            }
        }
        Ok(cfg)
    }
}
