//! SDK 统一错误定义
//!
//! 覆盖值对象校验与事件回执的最小必要集合。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SdkError {
    // --- 校验 ---
    #[error("invalid value: field={field}, reason={reason}")]
    InvalidValue { field: &'static str, reason: String },

    // --- 事件回执 ---
    #[error("event resolver error: {reason}")]
    EventResolver { reason: String },
    #[error("event already resolved: event_id={event_id}")]
    AlreadyResolved { event_id: String },
}

impl SdkError {
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    pub fn event_resolver(reason: impl Into<String>) -> Self {
        Self::EventResolver {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type SdkResult<T> = Result<T, SdkError>;
