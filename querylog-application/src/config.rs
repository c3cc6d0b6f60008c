use bon::Builder;
use http::HeaderName;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const DEFAULT_FORWARDED_FOR_HEADER: HeaderName = HeaderName::from_static("x-forwarded-for");
pub const DEFAULT_USER_AGENT_HEADER: HeaderName = http::header::USER_AGENT;
pub const DEFAULT_CLIENT_ID_HEADER: HeaderName = HeaderName::from_static("x-client-id");

/// HTTP 来源提取配置
///
/// 指定从哪些请求头读取客户端地址、User-Agent 与客户端 ID。
/// 未配置的项使用默认请求头名；请求头名不区分大小写。
///
/// ```rust
/// use querylog_application::HttpContextConfig;
///
/// let cfg = HttpContextConfig::builder()
///     .forwarded_for_header("X-Real-IP")
///     .build();
/// assert_eq!(cfg.forwarded_for_header, "X-Real-IP");
/// assert_eq!(cfg.client_id_header, "x-client-id");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpContextConfig {
    #[builder(into, default = DEFAULT_FORWARDED_FOR_HEADER.as_str().to_string())]
    pub forwarded_for_header: String,
    #[builder(into, default = DEFAULT_USER_AGENT_HEADER.as_str().to_string())]
    pub user_agent_header: String,
    #[builder(into, default = DEFAULT_CLIENT_ID_HEADER.as_str().to_string())]
    pub client_id_header: String,
}

impl Default for HttpContextConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HttpContextConfig {
    /// 从 JSON 文本读取配置（缺失字段使用默认值）
    pub fn from_json(text: &str) -> AppResult<Self> {
        serde_json::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }
}
