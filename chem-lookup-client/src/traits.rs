use async_trait::async_trait;

use crate::cas::CasNumber;
use crate::error::LookupResult;
use crate::types::PropertyReport;

/// 物化属性查询 Trait
///
/// 交互层只依赖此 trait，便于注入 mock 实现做离线测试。
#[async_trait]
pub trait PropertyLookup: Send + Sync {
    /// 数据源标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 查询一个 CAS 号对应的物化属性
    ///
    /// 服务端显式失败（`ok: false`）映射为
    /// [`LookupError::QueryFailed`](crate::LookupError::QueryFailed)，
    /// 传输层失败映射为其余变体。
    async fn fetch_properties(&self, cas: &CasNumber) -> LookupResult<PropertyReport>;
}
