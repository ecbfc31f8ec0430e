//! 交互状态定义
//!
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 [`QuerySession`](crate::QuerySession) 的转移方法触发。

use serde::Serialize;

/// 结果表格中的一行：双语标签 + 原始属性值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRow {
    /// 双语标签（如 “熔点 / Melting point”）
    pub label: String,
    /// 属性值，保持服务端原文
    pub value: String,
}

/// 结果表格主体
///
/// 白名单属性全部缺失时不是 “零行”，而是一个横跨两列的占位条目，
/// 渲染层据此区分普通行与占位行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PropertyTable {
    /// 按白名单固定顺序排列的属性行
    Rows(Vec<PropertyRow>),
    /// 单条占位，文案见 [`messages::NO_COMMON_PROPERTIES`](crate::messages::NO_COMMON_PROPERTIES)
    Placeholder,
}

/// 一次成功查询的完整展示内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    /// 以 “ / ” 连接的元信息摘要，可能为空串
    pub meta_summary: String,
    /// 属性表格
    pub table: PropertyTable,
    /// 来源链接；缺失时来源行仍会输出，只是链接目标为空
    pub source_url: Option<String>,
}

/// 交互状态机
///
/// 单值枚举保证 加载中/错误/结果 三种展示互斥，任意时刻恰有一种生效。
/// 每次提交从 `Loading` 开始，结算后恰好进入一次终态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UiState {
    /// 初始态，尚未提交过查询
    Idle,
    /// 请求进行中
    Loading,
    /// 错误横幅，携带固定或服务端透传的文案
    Error(String),
    /// 结果面板
    Result(ResultView),
}

impl UiState {
    /// 是否处于加载中
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_flag() {
        assert!(UiState::Loading.is_loading());
        assert!(!UiState::Idle.is_loading());
        assert!(!UiState::Error("x".into()).is_loading());
    }

    #[test]
    fn states_are_mutually_exclusive_by_construction() {
        // 单值枚举：赋新值即丢弃旧展示，不存在叠加态
        let mut state = UiState::Error("老错误".into());
        assert!(!state.is_loading());
        state = UiState::Loading;
        assert_eq!(state, UiState::Loading);
    }
}
