//! CAS 号验证

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LookupError, LookupResult};

/// CAS 号格式：2~7 位数字-2 位数字-1 位数字（如 67-56-1）
static CAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2,7}-\d{2}-\d$").expect("CAS pattern is valid"));

/// 已验证的 CAS 号
///
/// 只能通过 [`CasNumber::parse`]（或 `FromStr`/`TryFrom`）构造，
/// 反序列化同样走验证，网络层因此永远不会收到未经验证的原始输入。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CasNumber(String);

impl CasNumber {
    /// 验证一段原始输入
    ///
    /// 先去除首尾空白，再整体匹配 CAS 号格式。
    /// 失败时返回 [`LookupError::InvalidCasNumber`]，携带裁剪后的输入。
    pub fn parse(raw: &str) -> LookupResult<Self> {
        let trimmed = raw.trim();
        if CAS_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(LookupError::InvalidCasNumber(trimmed.to_string()))
        }
    }

    /// 规范化后的 CAS 字符串
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CasNumber {
    type Error = LookupError;

    fn try_from(value: String) -> LookupResult<Self> {
        Self::parse(&value)
    }
}

impl From<CasNumber> for String {
    fn from(cas: CasNumber) -> Self {
        cas.0
    }
}

impl FromStr for CasNumber {
    type Err = LookupError;

    fn from_str(s: &str) -> LookupResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CasNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
