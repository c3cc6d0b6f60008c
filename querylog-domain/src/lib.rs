//! 查询日志领域层（querylog-domain）
//!
//! 定义查询日志中使用的不可变值对象：
//! - `HttpContext`：一次入站 HTTP 请求的来源信息（对端地址、主机、客户端地址、UA、客户端 ID）
//! - `QueryId` / `QueryContext`：一次查询的标识，以及可选的 HTTP 来源
//!
//! 本 crate 不做网络处理、不做持久化，也不规定序列化格式；
//! `HttpContext` 的推导规则（如 forwarded-for 覆盖）由 HTTP 接入层负责。
//!
pub mod error;
pub mod http_context;
pub mod query_context;

pub use http_context::HttpContext;
pub use query_context::{QueryContext, QueryId};
