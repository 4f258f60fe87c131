//! 事件处理器（EventHandler）
//!
//! 消费某类市场事件；处理期间借用该事件的回执地址。
//!
use async_trait::async_trait;

use crate::return_address::EventReturnAddress;

/// 事件处理器：处理某一类型的事件
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// 事件载荷类型
    type Event: Send;

    /// 处理器名称（用于日志与错误标记）
    fn handler_name(&self) -> &str;

    /// 处理事件
    ///
    /// `return_address` 仅在本次调用内有效；需要异步回执时自行 clone。
    async fn handle(
        &self,
        event: Self::Event,
        return_address: &EventReturnAddress,
    ) -> anyhow::Result<()>;
}
