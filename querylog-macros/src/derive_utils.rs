use quote::ToTokens;
use std::collections::HashSet;
use syn::punctuated::Punctuated;
use syn::{Attribute, Path, Token};

// 拆分属性：非 derive 属性原样保留，derive 列表展开收集
fn split_derives(attrs: &[Attribute]) -> syn::Result<(Vec<Attribute>, Vec<Path>)> {
    let mut retained = Vec::new();
    let mut existing = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("derive") {
            let list = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
            existing.extend(list);
        } else {
            retained.push(attr.clone());
        }
    }

    Ok((retained, existing))
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
fn derive_key(p: &Path) -> String {
    match p.segments.last() {
        Some(last) => {
            let ident = last.ident.to_string();
            match ident.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{ident}"),
                _ => ident,
            }
        }
        None => p.to_token_stream().to_string(),
    }
}

/// 将 `required` 与条目上已有的 derive 合并为单个 `#[derive(..)]`，置于属性最前
///
/// 去重以 derive 名称为准，先出现者保留（`required` 优先）。
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) -> syn::Result<()> {
    let (retained, existing) = split_derives(attrs)?;

    let mut seen = HashSet::new();
    let merged: Vec<Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(retained).collect();
    Ok(())
}
