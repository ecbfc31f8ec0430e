//! CAS 物化属性查询的交互核心
//!
//! 提供从用户提交到展示渲染的完整客户端状态机，平台无关：
//! - 输入验证（[`chem_lookup_client::CasNumber`]）；
//! - 请求编排（[`QuerySession`]：`Idle → Loading → Error | Result`，
//!   请求凭证保证只有最新一次提交的结算生效）；
//! - 字段投影（[`project`] 模块：四项白名单属性 + 双语标签 + 元信息摘要）；
//! - 渲染接缝（[`Renderer`] trait，内置 [`TextRenderer`] 文本适配器）。
//!
//! 展示表面（DOM、终端等）与查询服务端都是外部协作者，
//! 分别通过 [`Renderer`] 与 [`chem_lookup_client::PropertyLookup`] 注入。

pub mod messages;
pub mod project;
mod render;
mod session;
mod state;

pub use render::{Renderer, TextRenderer};
pub use session::{Applied, QuerySession, RequestToken};
pub use state::{PropertyRow, PropertyTable, ResultView, UiState};
