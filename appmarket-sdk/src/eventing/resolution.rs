use appmarket_macros::value_object;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::return_address::EventReturnAddress;

/// 事件处理结果
#[value_object(default = false)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EventOutcome {
    Success,
    Failure { reason: String },
}

impl EventOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// 事件回执：处理结果与其对应的回执地址
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResolution {
    return_address: EventReturnAddress,
    outcome: EventOutcome,
    /// 附带给市场的说明
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    message: Option<String>,
    #[builder(default = Utc::now())]
    resolved_at: DateTime<Utc>,
}

impl EventResolution {
    pub fn success(return_address: EventReturnAddress) -> Self {
        Self::builder()
            .return_address(return_address)
            .outcome(EventOutcome::Success)
            .build()
    }

    pub fn failure(return_address: EventReturnAddress, reason: impl Into<String>) -> Self {
        Self::builder()
            .return_address(return_address)
            .outcome(EventOutcome::Failure {
                reason: reason.into(),
            })
            .build()
    }

    pub fn return_address(&self) -> &EventReturnAddress {
        &self.return_address
    }

    pub fn outcome(&self) -> &EventOutcome {
        &self.outcome
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn resolved_at(&self) -> &DateTime<Utc> {
        &self.resolved_at
    }
}
