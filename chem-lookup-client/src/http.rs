//! 查询端点的 reqwest 实现

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::cas::CasNumber;
use crate::error::{LookupError, LookupResult};
use crate::traits::PropertyLookup;
use crate::types::{LookupResponse, PropertyReport};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 日志中响应体的最大字节数
const LOG_BODY_LIMIT: usize = 256;

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// 截断响应体用于日志输出
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// 基于 HTTP 的查询客户端
///
/// 请求 `GET {base_url}/api/properties?cas=<百分号编码>`，不重试、
/// 不做请求级缓存；超时由上面的传输层默认值兜底。
pub struct HttpLookupClient {
    client: Client,
    base_url: String,
}

impl HttpLookupClient {
    /// 创建客户端，`base_url` 末尾的斜杠会被去掉
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: create_http_client(),
            base_url,
        }
    }

    async fn get_response(&self, cas: &CasNumber) -> LookupResult<LookupResponse> {
        let url = format!(
            "{}/api/properties?cas={}",
            self.base_url,
            urlencoding::encode(cas.as_str())
        );
        log::debug!("[{}] GET {url}", self.id());

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout(e.to_string())
            } else {
                LookupError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        log::debug!("[{}] Response Status: {status}", self.id());

        // 服务端对 ok:false 使用 400/502 状态码，但载荷结构相同，
        // 因此不在状态码层面短路，统一解码后交给 into_report 解释。
        let response_text = response
            .text()
            .await
            .map_err(|e| LookupError::NetworkError(format!("读取响应失败: {e}")))?;

        log::debug!(
            "[{}] Response Body: {}",
            self.id(),
            truncate_for_log(&response_text)
        );

        serde_json::from_str(&response_text).map_err(|e| {
            log::error!("[{}] JSON 解析失败: {e}", self.id());
            log::error!(
                "[{}] 原始响应: {}",
                self.id(),
                truncate_for_log(&response_text)
            );
            LookupError::ParseError(e.to_string())
        })
    }
}

#[async_trait]
impl PropertyLookup for HttpLookupClient {
    fn id(&self) -> &'static str {
        "chemicalbook"
    }

    async fn fetch_properties(&self, cas: &CasNumber) -> LookupResult<PropertyReport> {
        let response = self.get_response(cas).await?;
        match response.into_report() {
            Ok(report) => Ok(report),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[{}] {e}", self.id());
                } else {
                    log::error!("[{}] {e}", self.id());
                }
                Err(e)
            }
        }
    }
}
