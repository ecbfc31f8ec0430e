//! 固定的用户可见文案
//!
//! 所有面向用户的提示集中在此，交互逻辑不内联字符串字面量。

use chem_lookup_client::LookupError;

/// CAS 号格式校验失败的提示（示例驱动，不给出部分匹配诊断）
pub const INVALID_CAS_HINT: &str = "CAS 号格式看起来不对（应形如 67-56-1）";

/// 传输层失败的通用提示，不向用户区分具体原因
pub const NETWORK_ERROR: &str = "网络或服务器异常，请稍后重试。";

/// 白名单属性全部缺失时的占位文案
pub const NO_COMMON_PROPERTIES: &str = "未从来源页面解析到常见物化性质。";

/// 来源行前缀
pub const SOURCE_PREFIX: &str = "来源：";

/// 来源链接的显示文本
pub const SOURCE_LINK_TEXT: &str = "ChemicalBook 页面";

/// 把客户端错误映射为错误横幅文案
///
/// 领域层失败（`QueryFailed`）原样透出服务端消息；
/// 三类传输层失败统一为 [`NETWORK_ERROR`]，不进一步分类。
#[must_use]
pub fn error_banner_text(error: &LookupError) -> String {
    match error {
        LookupError::InvalidCasNumber(_) => INVALID_CAS_HINT.to_string(),
        LookupError::QueryFailed(message) => message.clone(),
        LookupError::NetworkError(_) | LookupError::Timeout(_) | LookupError::ParseError(_) => {
            NETWORK_ERROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_uses_fixed_hint() {
        let text = error_banner_text(&LookupError::InvalidCasNumber("abc".into()));
        assert_eq!(text, INVALID_CAS_HINT);
    }

    #[test]
    fn domain_error_passes_server_message_verbatim() {
        let text = error_banner_text(&LookupError::QueryFailed("not found".into()));
        assert_eq!(text, "not found");
    }

    #[test]
    fn transport_errors_collapse_to_generic_message() {
        for e in [
            LookupError::NetworkError("refused".into()),
            LookupError::Timeout("30s".into()),
            LookupError::ParseError("bad json".into()),
        ] {
            assert_eq!(error_banner_text(&e), NETWORK_ERROR);
        }
    }
}
