use std::net::SocketAddr;

use http::{HeaderMap, HeaderName};
use querylog_domain::HttpContext;

use crate::config::{
    DEFAULT_CLIENT_ID_HEADER, DEFAULT_FORWARDED_FOR_HEADER, DEFAULT_USER_AGENT_HEADER,
    HttpContextConfig,
};
use crate::error::{AppError, AppResult};

/// 从入站请求推导 `HttpContext`
///
/// 规则：
/// - `remote_address`：对端 socket 的 IP（不含端口）
/// - `remote_host`：调用方提供的已解析主机名；未提供时与 `remote_address` 相同
/// - `client_address`：forwarded-for 请求头的原始取值；缺失时回落到 `remote_address`
/// - `user_agent` / `client_id`：对应请求头取值；缺失则为空
///
/// 请求头出现多次时取第一个；无法按可见 ASCII 解码的取值视为缺失。
#[derive(Debug, Clone)]
pub struct HttpContextFactory {
    forwarded_for: HeaderName,
    user_agent: HeaderName,
    client_id: HeaderName,
}

impl HttpContextFactory {
    pub fn new(config: &HttpContextConfig) -> AppResult<Self> {
        Ok(Self {
            forwarded_for: parse_header_name(&config.forwarded_for_header)?,
            user_agent: parse_header_name(&config.user_agent_header)?,
            client_id: parse_header_name(&config.client_id_header)?,
        })
    }

    pub fn create(
        &self,
        remote_addr: SocketAddr,
        remote_host: Option<&str>,
        headers: &HeaderMap,
    ) -> HttpContext {
        let remote_address = remote_addr.ip().to_string();
        let remote_host = remote_host.map_or_else(|| remote_address.clone(), str::to_owned);

        let client_address = header_value(headers, &self.forwarded_for)
            .unwrap_or_else(|| remote_address.clone());
        let user_agent = header_value(headers, &self.user_agent);
        let client_id = header_value(headers, &self.client_id);

        let ctx = HttpContext::new(
            remote_address,
            remote_host,
            client_address,
            user_agent,
            client_id,
        );

        tracing::trace!(
            remote_address = ctx.remote_address(),
            client_address = ctx.client_address(),
            "http context created"
        );

        ctx
    }
}

impl Default for HttpContextFactory {
    fn default() -> Self {
        Self {
            forwarded_for: DEFAULT_FORWARDED_FOR_HEADER,
            user_agent: DEFAULT_USER_AGENT_HEADER,
            client_id: DEFAULT_CLIENT_ID_HEADER,
        }
    }
}

fn parse_header_name(name: &str) -> AppResult<HeaderName> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| AppError::InvalidHeaderName {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    let value = headers.get(name)?;
    match value.to_str() {
        Ok(s) => Some(s.to_string()),
        Err(_) => {
            tracing::debug!(header = %name, "ignoring header value that is not visible ASCII");
            None
        }
    }
}
