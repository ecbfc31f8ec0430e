//! 查询会话：提交编排与状态转移
//!
//! 状态本身是显式对象（[`UiState`]），转移方法是同步纯逻辑；
//! 唯一的挂起点是 [`QuerySession::submit`] 中等待网络调用的那一步。
//! 快速连续提交不做取消，而是用请求凭证把
//! “恰有一个在途请求是权威的” 变成显式且可测试的策略：
//! 只有携带最新凭证的结算会改变会话状态。

use std::sync::Arc;

use chem_lookup_client::{CasNumber, LookupResult, PropertyLookup, PropertyReport};

use crate::messages;
use crate::project;
use crate::render::Renderer;
use crate::state::UiState;

/// 一次提交的请求凭证
///
/// 由 [`QuerySession::begin`] 签发，单调递增；不可在会话之间复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// [`QuerySession::apply`] 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// 凭证是最新的，结算已生效
    Latest,
    /// 凭证已过期，结算被忽略，状态未变
    Stale,
}

/// 查询会话
pub struct QuerySession {
    lookup: Arc<dyn PropertyLookup>,
    state: UiState,
    request_seq: u64,
}

impl QuerySession {
    /// 创建会话，初始状态为 [`UiState::Idle`]
    #[must_use]
    pub fn new(lookup: Arc<dyn PropertyLookup>) -> Self {
        Self {
            lookup,
            state: UiState::Idle,
            request_seq: 0,
        }
    }

    /// 当前状态
    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// 同步进入 `Loading` 并签发新的请求凭证
    ///
    /// 之前展示的错误或结果随状态赋值一并清除。
    /// 再次调用会使尚未结算的旧凭证作废。
    pub fn begin(&mut self) -> RequestToken {
        self.request_seq += 1;
        self.state = UiState::Loading;
        RequestToken(self.request_seq)
    }

    /// 应用一次已结束请求的结算
    ///
    /// 凭证过期时返回 [`Applied::Stale`] 且状态不变；
    /// 否则退出 `Loading`，进入 `Result` 或 `Error` 终态。
    pub fn apply(
        &mut self,
        token: RequestToken,
        outcome: LookupResult<PropertyReport>,
    ) -> Applied {
        if token.0 != self.request_seq {
            log::debug!(
                "忽略过期请求的结算 (token {}, 最新 {})",
                token.0,
                self.request_seq
            );
            return Applied::Stale;
        }

        self.state = match outcome {
            Ok(report) => UiState::Result(project::project(&report)),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("{e}");
                } else {
                    log::error!("{e}");
                }
                UiState::Error(messages::error_banner_text(&e))
            }
        };
        Applied::Latest
    }

    /// 把当前状态反映到渲染器
    pub fn reflect<R: Renderer>(&self, renderer: &mut R) {
        match &self.state {
            UiState::Idle => {}
            UiState::Loading => renderer.show_loading(),
            UiState::Error(message) => renderer.show_error(message),
            UiState::Result(view) => renderer.show_result(view),
        }
    }

    /// 完整提交流程：验证 → `Loading` → 请求 → 结算
    ///
    /// 验证失败不发起网络调用，直接进入 `Error`。
    /// 每次状态变更后都反映到渲染器；过期结算不触发渲染。
    pub async fn submit<R: Renderer>(&mut self, raw: &str, renderer: &mut R) {
        let cas = match CasNumber::parse(raw) {
            Ok(cas) => cas,
            Err(e) => {
                log::warn!("{e}");
                self.state = UiState::Error(messages::error_banner_text(&e));
                self.reflect(renderer);
                return;
            }
        };

        let token = self.begin();
        self.reflect(renderer);

        let outcome = self.lookup.fetch_properties(&cas).await;
        if self.apply(token, outcome) == Applied::Latest {
            self.reflect(renderer);
        }
    }
}
