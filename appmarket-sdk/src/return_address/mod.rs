//! 事件回执地址（EventReturnAddress）
//!
//! 事件处理器被调用时随事件一同传入的上下文信息，用于在处理结束后
//! 将“事件处理完成”信号发回发起该事件的 AppMarket。
//! 构造与校验策略见 `ReturnAddressPolicy`。

mod address;
mod policy;

pub use address::EventReturnAddress;
pub use policy::ReturnAddressPolicy;
