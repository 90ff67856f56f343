//! 加盟领域的过程宏
//!
//! - `#[entity_id]`：为 `struct XxxId(String);` 生成强类型标识
//! - `#[value_object]`：为值对象合并标准派生
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;
mod value_object;

/// 实体 ID 宏
///
/// ```ignore
/// #[entity_id]
/// pub struct BranchId(String);
///
/// let id = BranchId::generate();
/// assert!(!id.as_str().is_empty());
/// ```
///
/// 使用方需依赖 `serde`（derive）与 `uuid`（v4）。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏，参数 `debug = false` 可关闭 `Debug` 派生
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
