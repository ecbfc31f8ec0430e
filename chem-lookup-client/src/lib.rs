//! # chem-lookup-client
//!
//! ChemicalBook CAS 物化属性查询端点的客户端库。
//!
//! 提供：
//! - [`CasNumber`] — 经验证的 CAS 号（`\d{2,7}-\d{2}-\d`），网络层只接受此类型；
//! - [`LookupResponse`] / [`PropertyReport`] — `/api/properties` 的线上契约
//!   与解释后的领域类型；
//! - [`PropertyLookup`] — 查询 trait 接缝，交互层据此注入实现；
//! - [`HttpLookupClient`] — 基于 reqwest 的默认实现。
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chem_lookup_client::{CasNumber, HttpLookupClient, PropertyLookup};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cas = CasNumber::parse("67-56-1")?;
//!     let client = HttpLookupClient::new("http://localhost:8000");
//!     let report = client.fetch_properties(&cas).await?;
//!     for (key, value) in &report.properties {
//!         println!("{key}: {value}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! 所有操作返回 [`LookupResult`]。[`LookupError::QueryFailed`] 表示服务端
//! 显式报告失败（`ok: false`），其余变体为传输层失败；本库不做重试。

mod cas;
mod error;
mod http;
mod traits;
mod types;

pub use cas::CasNumber;
pub use error::{LookupError, LookupResult};
pub use http::HttpLookupClient;
pub use traits::PropertyLookup;
pub use types::{LookupResponse, PropertyReport, SubstanceMeta, QUERY_FAILED_FALLBACK};
