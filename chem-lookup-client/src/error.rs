//! 统一错误类型定义

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 查询客户端错误类型
///
/// 所有变体均可序列化，便于结构化上报。三类传输层失败
/// （网络、超时、响应解析）对用户展示同一条通用提示，
/// 但在日志和上报中保留区分。
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code", content = "details")]
pub enum LookupError {
    /// 输入不是合法的 CAS 号（进入网络层之前即被拒绝）
    #[error("Invalid CAS number: {0}")]
    InvalidCasNumber(String),

    /// 网络层错误（连接失败、响应体读取失败等）
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 请求超时
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 响应体无法解析为约定的 JSON 结构
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 服务端显式报告查询失败（`ok: false`），携带服务端消息或固定兜底文案
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl LookupError {
    /// 是否为预期行为（用户输入、服务端正常报错），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidCasNumber(_) | Self::QueryFailed(_))
    }
}

/// 客户端 Result 类型别名
pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_cas() {
        let e = LookupError::InvalidCasNumber("abc".to_string());
        assert_eq!(e.to_string(), "Invalid CAS number: abc");
    }

    #[test]
    fn display_network_error() {
        let e = LookupError::NetworkError("connection refused".to_string());
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_query_failed() {
        let e = LookupError::QueryFailed("抓取失败".to_string());
        assert_eq!(e.to_string(), "Query failed: 抓取失败");
    }

    #[test]
    fn expected_variants() {
        assert!(LookupError::InvalidCasNumber("x".into()).is_expected());
        assert!(LookupError::QueryFailed("x".into()).is_expected());
        assert!(!LookupError::NetworkError("x".into()).is_expected());
        assert!(!LookupError::Timeout("x".into()).is_expected());
        assert!(!LookupError::ParseError("x".into()).is_expected());
    }

    #[test]
    fn serialize_json_tagged() {
        let e = LookupError::QueryFailed("not found".to_string());
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"QueryFailed\""));
        assert!(json.contains("\"details\":\"not found\""));
    }

    #[test]
    fn deserialize_round_trip() {
        let variants = vec![
            LookupError::InvalidCasNumber("1-2-3".into()),
            LookupError::NetworkError("down".into()),
            LookupError::Timeout("30s".into()),
            LookupError::ParseError("bad json".into()),
            LookupError::QueryFailed("no data".into()),
        ];
        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: LookupError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
