//! 内存版事件回执器（InMemoryEventResolver）
//!
//! 只记录回执、不做任何网络调用，满足 `EventResolver` 协议：
//! - 以（规范化后的市场地址, 事件 ID）为键，同一事件只能回执一次；
//! - 按回执顺序保存，便于测试断言；
//! - 典型用途：测试环境、示例与本地开发。

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{EventResolution, EventResolver};
use crate::error::{SdkError, SdkResult as Result};
use crate::return_address::EventReturnAddress;

#[derive(Default)]
struct State {
    keys: HashSet<(String, String)>,
    resolutions: Vec<EventResolution>,
}

/// 简单的内存回执器实现，clone 后共享同一份记录
#[derive(Clone, Default)]
pub struct InMemoryEventResolver {
    state: Arc<RwLock<State>>,
}

// 市场部分按规范化 URL 比较，同一市场的不同写法视为同一键
fn key_of(addr: &EventReturnAddress) -> (String, String) {
    (addr.marketplace_key(), addr.event_id().to_string())
}

impl InMemoryEventResolver {
    /// 创建一个空的内存回执器
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定事件的回执（若已回执）
    pub async fn resolution_for(&self, addr: &EventReturnAddress) -> Option<EventResolution> {
        let key = key_of(addr);
        let state = self.state.read().await;
        state
            .resolutions
            .iter()
            .find(|r| key_of(r.return_address()) == key)
            .cloned()
    }

    /// 事件是否已回执
    pub async fn is_resolved(&self, addr: &EventReturnAddress) -> bool {
        self.state.read().await.keys.contains(&key_of(addr))
    }

    /// 按回执顺序返回全部记录
    pub async fn resolutions(&self) -> Vec<EventResolution> {
        self.state.read().await.resolutions.clone()
    }
}

#[async_trait]
impl EventResolver for InMemoryEventResolver {
    async fn resolve(&self, resolution: EventResolution) -> Result<()> {
        let addr = resolution.return_address();
        let mut state = self.state.write().await;

        if !state.keys.insert(key_of(addr)) {
            warn!(
                event_id = addr.event_id(),
                marketplace = addr.marketplace_base_url(),
                "event already resolved"
            );
            return Err(SdkError::AlreadyResolved {
                event_id: addr.event_id().to_string(),
            });
        }

        debug!(
            event_id = addr.event_id(),
            marketplace = addr.marketplace_base_url(),
            client_id = addr.client_id(),
            success = resolution.outcome().is_success(),
            "event resolution recorded"
        );
        state.resolutions.push(resolution);
        Ok(())
    }
}
