use std::fmt;

use appmarket_macros::value_object;
use serde::Deserialize;
use url::Url;

use super::ReturnAddressPolicy;
use super::policy::{check_not_blank, parse_base_url};
use crate::error::{SdkError, SdkResult as Result};
use crate::value_object::ValueObject;

/// 事件回执地址
///
/// 由事件分发方在调用 `EventHandler` 前创建，借用给处理器使用；
/// 处理完成后交给 `EventResolver` 将处理结果发回对应的 AppMarket。
/// 构造后不可变，三个字段按原样保存，访问器返回构造时的输入。
///
/// # 示例
///
/// ```
/// use appmarket_sdk::return_address::EventReturnAddress;
///
/// let addr = EventReturnAddress::new("evt-123", "https://market.example.com", "client-42")?;
/// assert_eq!(addr.event_id(), "evt-123");
/// assert_eq!(addr.marketplace_base_url(), "https://market.example.com");
/// assert_eq!(addr.client_id(), "client-42");
/// # Ok::<(), appmarket_sdk::error::SdkError>(())
/// ```
#[value_object(default = false)]
#[serde(try_from = "RawEventReturnAddress")]
pub struct EventReturnAddress {
    event_id: String,
    marketplace_base_url: String,
    client_id: String,
}

impl EventReturnAddress {
    /// 使用默认策略校验并创建
    pub fn new(
        event_id: impl Into<String>,
        marketplace_base_url: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Result<Self> {
        Self::with_policy(
            event_id,
            marketplace_base_url,
            client_id,
            &ReturnAddressPolicy::default(),
        )
    }

    /// 使用指定策略校验并创建
    pub fn with_policy(
        event_id: impl Into<String>,
        marketplace_base_url: impl Into<String>,
        client_id: impl Into<String>,
        policy: &ReturnAddressPolicy,
    ) -> Result<Self> {
        let address = Self {
            event_id: event_id.into(),
            marketplace_base_url: marketplace_base_url.into(),
            client_id: client_id.into(),
        };
        address.validate_with(policy)?;
        Ok(address)
    }

    /// 事件的唯一标识
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// 发起事件的市场实例的基础 URL
    pub fn marketplace_base_url(&self) -> &str {
        &self.marketplace_base_url
    }

    /// 事件关联的客户端/租户标识
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// 按指定策略校验（策略只在构造期生效，不随值保存）
    pub fn validate_with(&self, policy: &ReturnAddressPolicy) -> Result<()> {
        policy.check_identifier("event_id", &self.event_id)?;
        policy.check_identifier("client_id", &self.client_id)?;
        policy.check_base_url("marketplace_base_url", &self.marketplace_base_url)?;
        Ok(())
    }

    /// 与策略无关的不变量：标识非空，市场地址为带 host 的绝对 URL
    fn check_invariants(&self) -> Result<()> {
        check_not_blank("event_id", &self.event_id)?;
        check_not_blank("client_id", &self.client_id)?;
        parse_base_url("marketplace_base_url", &self.marketplace_base_url)?;
        Ok(())
    }

    /// 回执去重用的市场标识：scheme/host 小写、省略默认端口、去掉路径尾部斜杠
    ///
    /// 访问器仍返回原始输入，只有比较时使用该形式。
    #[cfg_attr(not(feature = "eventing"), allow(dead_code))]
    pub(crate) fn marketplace_key(&self) -> String {
        let Ok(url) = Url::parse(&self.marketplace_base_url) else {
            return self.marketplace_base_url.clone();
        };
        let mut key = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
        if let Some(port) = url.port() {
            key.push_str(&format!(":{port}"));
        }
        key.push_str(url.path().trim_end_matches('/'));
        key
    }
}

impl ValueObject for EventReturnAddress {
    type Error = SdkError;

    fn validate(&self) -> Result<()> {
        self.check_invariants()
    }
}

impl fmt::Display for EventReturnAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} (client {})",
            self.event_id, self.marketplace_base_url, self.client_id
        )
    }
}

// 反序列化先落到未校验的形态，再检查不变量；
// 构造时使用的策略不随值保存，因此这里不能按默认策略重新校验
#[derive(Deserialize)]
struct RawEventReturnAddress {
    event_id: String,
    marketplace_base_url: String,
    client_id: String,
}

impl TryFrom<RawEventReturnAddress> for EventReturnAddress {
    type Error = SdkError;

    fn try_from(raw: RawEventReturnAddress) -> Result<Self> {
        let address = Self {
            event_id: raw.event_id,
            marketplace_base_url: raw.marketplace_base_url,
            client_id: raw.client_id,
        };
        address.check_invariants()?;
        Ok(address)
    }
}
