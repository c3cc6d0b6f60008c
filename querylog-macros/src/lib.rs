use proc_macro::TokenStream;

mod derive_utils;
mod value_object;

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Clone, Serialize, Deserialize, PartialEq, Eq
/// - 可选派生：`debug`（默认开启）、`default`（默认开启）、`hash`（默认关闭）
///
/// ```ignore
/// #[value_object(default = false, hash = true)]
/// pub struct HttpContext { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
