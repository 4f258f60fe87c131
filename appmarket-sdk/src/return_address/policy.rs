use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{SdkError, SdkResult as Result};

/// 回执地址的构造期校验策略
///
/// 默认策略：
/// - 标识（`event_id`/`client_id`）非空、不超过 256 字节、首尾无空白；
/// - 市场地址为带 host 的绝对 URL，scheme 为 `https` 或 `http`，且不带 query/fragment。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnAddressPolicy {
    /// 允许的 URL scheme（大小写不敏感）
    pub allowed_schemes: Vec<String>,
    /// 标识的最大字节长度
    pub max_identifier_len: usize,
    /// 是否拒绝首尾带空白的标识
    pub reject_surrounding_whitespace: bool,
}

impl Default for ReturnAddressPolicy {
    fn default() -> Self {
        Self {
            allowed_schemes: vec!["https".to_string(), "http".to_string()],
            max_identifier_len: 256,
            reject_surrounding_whitespace: true,
        }
    }
}

impl ReturnAddressPolicy {
    /// 仅允许 https 的严格策略（生产环境的市场地址）
    pub fn https_only() -> Self {
        Self {
            allowed_schemes: vec!["https".to_string()],
            ..Self::default()
        }
    }

    pub(crate) fn check_identifier(&self, field: &'static str, value: &str) -> Result<()> {
        check_not_blank(field, value)?;
        if value.len() > self.max_identifier_len {
            return Err(SdkError::invalid_value(
                field,
                format!(
                    "length {} exceeds limit {}",
                    value.len(),
                    self.max_identifier_len
                ),
            ));
        }
        if self.reject_surrounding_whitespace && value.trim() != value {
            return Err(SdkError::invalid_value(
                field,
                "must not have leading or trailing whitespace",
            ));
        }
        Ok(())
    }

    pub(crate) fn check_base_url(&self, field: &'static str, value: &str) -> Result<()> {
        let url = parse_base_url(field, value)?;
        if !self
            .allowed_schemes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(url.scheme()))
        {
            return Err(SdkError::invalid_value(
                field,
                format!("scheme '{}' is not allowed", url.scheme()),
            ));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(SdkError::invalid_value(
                field,
                "must not carry a query or fragment",
            ));
        }
        Ok(())
    }
}

// 与策略无关的不变量：任何合法回执地址都必须满足，
// 反序列化与 `ValueObject::validate` 只检查这一层

pub(crate) fn check_not_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SdkError::invalid_value(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn parse_base_url(field: &'static str, value: &str) -> Result<Url> {
    check_not_blank(field, value)?;
    let url = Url::parse(value).map_err(|e| SdkError::invalid_value(field, e.to_string()))?;
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(SdkError::invalid_value(
            field,
            "must be an absolute URL with a host",
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(err: SdkError) -> String {
        match err {
            SdkError::InvalidValue { reason, .. } => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn identifier_rules() {
        let policy = ReturnAddressPolicy::default();
        assert!(policy.check_identifier("event_id", "evt-123").is_ok());
        assert_eq!(
            reason(policy.check_identifier("event_id", "").unwrap_err()),
            "must not be empty"
        );
        assert!(policy.check_identifier("event_id", "   ").is_err());
        assert!(policy.check_identifier("event_id", " evt-1").is_err());
        assert!(policy.check_identifier("event_id", &"x".repeat(257)).is_err());
        assert!(policy.check_identifier("event_id", &"x".repeat(256)).is_ok());
    }

    #[test]
    fn surrounding_whitespace_can_be_allowed() {
        let policy = ReturnAddressPolicy {
            reject_surrounding_whitespace: false,
            ..Default::default()
        };
        assert!(policy.check_identifier("client_id", " client-42 ").is_ok());
        assert!(policy.check_identifier("client_id", "  ").is_err());
    }

    #[test]
    fn base_url_rules() {
        let policy = ReturnAddressPolicy::default();
        assert!(policy.check_base_url("u", "https://market.example.com").is_ok());
        assert!(policy.check_base_url("u", "http://localhost:8080/api/").is_ok());

        assert!(policy.check_base_url("u", "").is_err());
        assert!(policy.check_base_url("u", "market.example.com").is_err());
        assert!(policy.check_base_url("u", "mailto:ops@example.com").is_err());
        assert!(policy.check_base_url("u", "https://market.example.com?a=1").is_err());
        assert!(policy.check_base_url("u", "https://market.example.com/#top").is_err());
        assert_eq!(
            reason(policy.check_base_url("u", "ftp://market.example.com").unwrap_err()),
            "scheme 'ftp' is not allowed"
        );
    }

    // 不变量层不关心 scheme、长度与空白
    #[test]
    fn invariants_ignore_policy_limits() {
        assert!(check_not_blank("event_id", &"x".repeat(1024)).is_ok());
        assert!(check_not_blank("event_id", " x ").is_ok());
        assert!(check_not_blank("event_id", " ").is_err());
        assert!(parse_base_url("u", "ftp://files.example.com").is_ok());
        assert!(parse_base_url("u", "mailto:ops@example.com").is_err());
        assert!(parse_base_url("u", "").is_err());
    }

    #[test]
    fn https_only_rejects_http() {
        let policy = ReturnAddressPolicy::https_only();
        assert!(policy.check_base_url("u", "https://market.example.com").is_ok());
        assert!(policy.check_base_url("u", "http://market.example.com").is_err());
    }
}
