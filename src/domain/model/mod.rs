//! Request parameter bags and result payloads, grouped by API area.
//!
//! 欄位命名遵循 Rust 慣例，線上格式 (JSON key) 由 serde 屬性對應。
//! 綁定在 URI 路徑或查詢字串上的欄位不會出現在 JSON body 中。

pub mod common;
pub mod contacts;
pub mod federation;
pub mod hierarchy;
pub mod metrics;
pub mod metrics_v2;
pub mod routing;
pub mod tags;
pub mod users;

pub use common::*;
pub use contacts::*;
pub use federation::*;
pub use hierarchy::*;
pub use metrics::*;
pub use metrics_v2::*;
pub use routing::*;
pub use tags::*;
pub use users::*;
