//! 事件子系统（eventing）
//!
//! 回执地址两侧的协议：
//! - `EventHandler`：处理市场事件，处理期间借用 `EventReturnAddress`；
//! - `EventResolver`：将处理结果（`EventResolution`）发回发起事件的市场；
//! - `InMemoryEventResolver`：仅记录回执的内存实现。
//!
//! 不包含事件投递、分发循环与重试，也不绑定具体传输实现。
//!
pub mod handler;
pub mod resolution;
pub mod resolver;
pub mod resolver_inmemory;

pub use handler::EventHandler;
pub use resolution::{EventOutcome, EventResolution};
pub use resolver::{EventResolver, handle_and_resolve};
pub use resolver_inmemory::InMemoryEventResolver;
