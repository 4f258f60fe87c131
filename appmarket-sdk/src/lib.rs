//! AppMarket 事件 SDK（appmarket-sdk）
//!
//! 处理市场事件时使用的基础构件：
//! - 回执地址（`return_address`）：事件 ID、市场地址与客户端 ID 组成的不可变值对象，
//!   以及构造期校验策略；
//! - 事件子系统（`eventing`，默认开启）：处理器与回执器协议、处理结果与内存回执器；
//! - 值对象抽象（`value_object`）与统一错误（`error`）。
//!
//! 典型用法：
//! 1. 分发方从事件元数据构造 `EventReturnAddress`；
//! 2. 实现 `EventHandler` 处理事件；
//! 3. 处理结束后通过 `EventResolver` 将 `EventResolution` 发回市场。
//!
pub mod error;
#[cfg(feature = "eventing")]
pub mod eventing;
pub mod return_address;
pub mod value_object;
