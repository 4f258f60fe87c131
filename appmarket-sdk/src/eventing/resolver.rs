//! 事件回执（EventResolver）
//!
//! 将事件处理结果发回回执地址所指向的市场。SDK 不绑定具体传输实现。
//!
use async_trait::async_trait;
use tracing::{debug, warn};

use super::{EventHandler, EventOutcome, EventResolution};
use crate::error::SdkResult as Result;
use crate::return_address::EventReturnAddress;

/// 事件回执器
#[async_trait]
pub trait EventResolver: Send + Sync {
    /// 发送一次处理结果
    async fn resolve(&self, resolution: EventResolution) -> Result<()>;
}

/// 调用处理器，并将其结果作为回执交给 `resolver`
///
/// 处理器返回错误时以 `Failure` 回执，错误信息作为原因；
/// 只有回执本身失败时才返回 `Err`。
pub async fn handle_and_resolve<H, R>(
    handler: &H,
    resolver: &R,
    event: H::Event,
    return_address: EventReturnAddress,
) -> Result<EventOutcome>
where
    H: EventHandler + ?Sized,
    R: EventResolver + ?Sized,
{
    let resolution = match handler.handle(event, &return_address).await {
        Ok(()) => {
            debug!(
                handler = handler.handler_name(),
                event_id = return_address.event_id(),
                "event handled"
            );
            EventResolution::success(return_address)
        }
        Err(err) => {
            warn!(
                handler = handler.handler_name(),
                event_id = return_address.event_id(),
                error = %err,
                "event handler failed"
            );
            EventResolution::failure(return_address, format!("{err:#}"))
        }
    };

    let outcome = resolution.outcome().clone();
    resolver.resolve(resolution).await?;
    Ok(outcome)
}
