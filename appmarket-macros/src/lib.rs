//! AppMarket SDK 过程宏
//!
//! 目前仅提供 `#[value_object]`，为值对象统一追加派生集合。
//!
use proc_macro::TokenStream;

mod utils;
mod value_object;

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash，以及可选的 Default
/// - 参数：
///   - `debug = true|false`：是否派生 Debug，默认 true
///   - `default = true|false`：是否派生 Default，默认 true；
///     不存在合法“空值”的值对象（如必须非空的标识）应关闭
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
