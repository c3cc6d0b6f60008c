use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Path, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 必选派生：Clone, Serialize, Deserialize, PartialEq, Eq
/// - 参数：`debug`（默认 true）、`default`（默认 true）、`hash`（默认 false）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let required = cfg.required_derives();

    let attrs = match &mut input {
        Item::Struct(st) => &mut st.attrs,
        Item::Enum(en) => &mut en.attrs,
        other => {
            // 只标注条目的首个 token，诊断位置不随条目长度变化
            let span = other
                .to_token_stream()
                .into_iter()
                .next()
                .map_or_else(|| other.span(), |tt| tt.span());
            return syn::Error::new(span, "#[value_object] only supports struct or enum")
                .to_compile_error()
                .into();
        }
    };

    if let Err(err) = apply_derives(attrs, required) {
        return err.to_compile_error().into();
    }

    TokenStream::from(quote! { #input })
}

// -------- parsing --------

#[derive(Default)]
struct ValueObjectAttrConfig {
    debug: Option<bool>,
    default: Option<bool>,
    hash: Option<bool>,
}

impl ValueObjectAttrConfig {
    fn required_derives(&self) -> Vec<Path> {
        let mut required: Vec<Path> = Vec::new();

        if self.debug.unwrap_or(true) {
            required.push(syn::parse_quote!(Debug));
        }
        if self.default.unwrap_or(true) {
            required.push(syn::parse_quote!(Default));
        }

        let always: [Path; 5] = [
            syn::parse_quote!(Clone),
            syn::parse_quote!(serde::Serialize),
            syn::parse_quote!(serde::Deserialize),
            syn::parse_quote!(PartialEq),
            syn::parse_quote!(Eq),
        ];
        required.extend(always);

        if self.hash.unwrap_or(false) {
            required.push(syn::parse_quote!(Hash));
        }

        required
    }
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self::default();
        if input.is_empty() {
            return Ok(cfg);
        }

        let pairs: Punctuated<ValueObjectAttrElem, Token![,]> =
            Punctuated::parse_terminated(input)?;

        for elem in pairs {
            let slot = match elem.key.to_string().as_str() {
                "debug" => &mut cfg.debug,
                "default" => &mut cfg.default,
                "hash" => &mut cfg.hash,
                _ => {
                    return Err(syn::Error::new(
                        elem.key.span(),
                        "unknown key in attribute; expected 'debug', 'default' or 'hash'",
                    ));
                }
            };

            if slot.is_some() {
                return Err(syn::Error::new(
                    elem.key.span(),
                    format!("duplicate key '{}' in attribute", elem.key),
                ));
            }
            *slot = Some(elem.value);
        }

        Ok(cfg)
    }
}

struct ValueObjectAttrElem {
    key: syn::Ident,
    value: bool,
}

impl Parse for ValueObjectAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        // `default` 是关键字，需按任意标识符解析
        let key = <syn::Ident as syn::ext::IdentExt>::parse_any(input)?;
        let _eq: Token![=] = input.parse()?;
        let lit: syn::LitBool = input.parse().map_err(|err| {
            syn::Error::new(err.span(), format!("expected boolean literal for '{key}'"))
        })?;

        Ok(Self {
            key,
            value: lit.value(),
        })
    }
}
