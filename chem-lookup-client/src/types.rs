//! `/api/properties` 响应契约与解释后的领域类型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, LookupResult};

/// 服务端未附带 `error` 字段时的兜底文案
pub const QUERY_FAILED_FALLBACK: &str = "查询失败";

/// 物质名称与编号元信息
///
/// 三个键在线上契约里都是可选的（来源页面解析不到就缺失或为 null），
/// 缺失的键不参与展示，不视为错误。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceMeta {
    /// 中文名称
    #[serde(rename = "中文名称", default, skip_serializing_if = "Option::is_none")]
    pub chinese_name: Option<String>,

    /// 英文名称
    #[serde(rename = "英文名称", default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,

    /// 来源页面回显的 CAS 号（不与查询值做一致性校验）
    #[serde(rename = "CAS", default, skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,
}

impl SubstanceMeta {
    /// 三个键是否全部缺失
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chinese_name.is_none() && self.english_name.is_none() && self.cas.is_none()
    }
}

/// 查询端点的原始响应结构
///
/// `ok: false` 时服务端以非 2xx 状态码返回，但载荷结构相同，
/// 统一由 [`LookupResponse::into_report`] 解释。
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    /// 查询是否成功
    pub ok: bool,
    /// 失败时的服务端消息（`ok: false` 时出现）
    #[serde(default)]
    pub error: Option<String>,
    /// 物质元信息
    #[serde(default)]
    pub meta: Option<SubstanceMeta>,
    /// 属性名到属性值的映射，键集不受契约约束
    #[serde(default)]
    pub properties: Option<HashMap<String, String>>,
    /// 来源页面链接
    #[serde(default)]
    pub source_url: Option<String>,
}

impl LookupResponse {
    /// 把原始响应解释为成功报告或领域层失败
    ///
    /// - `ok: false` ⇒ [`LookupError::QueryFailed`]，优先使用服务端
    ///   消息，缺失则使用 [`QUERY_FAILED_FALLBACK`]；
    /// - `ok: true` ⇒ [`PropertyReport`]，缺失的 `meta` 视为全空、
    ///   缺失的 `properties` 视为空映射、缺失的 `source_url` 保留为 None。
    pub fn into_report(self) -> LookupResult<PropertyReport> {
        if !self.ok {
            return Err(LookupError::QueryFailed(
                self.error
                    .unwrap_or_else(|| QUERY_FAILED_FALLBACK.to_string()),
            ));
        }
        Ok(PropertyReport {
            meta: self.meta.unwrap_or_default(),
            properties: self.properties.unwrap_or_default(),
            source_url: self.source_url,
        })
    }
}

/// 一次成功查询的解释结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyReport {
    /// 物质元信息
    pub meta: SubstanceMeta,
    /// 原始属性映射，值保持原样（不做单位解析或数值转换）
    pub properties: HashMap<String, String>,
    /// 来源页面链接，可能缺失
    pub source_url: Option<String>,
}
