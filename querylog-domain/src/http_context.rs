use bon::Builder;
use querylog_macros::value_object;

/// HTTP 请求来源信息
///
/// 记录一次入站请求在被记入查询日志时的来源：对端地址、对端主机、
/// 实际客户端地址，以及客户端自报的 User-Agent 与客户端 ID。
///
/// 构造后不可变；相等性与哈希完全由字段值决定。本类型不做任何推导或校验，
/// `client_address` 的取值规则（forwarded-for 覆盖）由构造方负责。
///
/// ```
/// use querylog_domain::HttpContext;
///
/// let ctx = HttpContext::builder()
///     .remote_address("10.0.0.5")
///     .remote_host("10.0.0.5")
///     .client_address("203.0.113.9")
///     .user_agent("curl/8.0")
///     .build();
///
/// assert_eq!(ctx.client_address(), "203.0.113.9");
/// assert_eq!(ctx.user_agent(), Some("curl/8.0"));
/// assert_eq!(ctx.client_id(), None);
/// ```
///
/// 三个必填字段缺一不可，缺少 `client_address` 时无法调用 `build`：
///
/// ```compile_fail
/// use querylog_domain::HttpContext;
///
/// let ctx = HttpContext::builder()
///     .remote_address("10.0.0.5")
///     .remote_host("10.0.0.5")
///     .build();
/// ```
#[value_object(default = false, hash = true)]
#[derive(Builder)]
pub struct HttpContext {
    /// 连接到本节点的对端地址
    #[builder(into)]
    remote_address: String,
    /// 对端主机（通常与对端地址相同）
    #[builder(into)]
    remote_host: String,
    /// 发起请求的客户端地址；设置了 X-Forwarded-For 时为其取值，否则同 `remote_address`
    #[builder(into)]
    client_address: String,
    /// 客户端的 User-Agent
    #[builder(into)]
    user_agent: Option<String>,
    /// 客户端 ID
    #[builder(into)]
    client_id: Option<String>,
}

impl HttpContext {
    pub fn new(
        remote_address: impl Into<String>,
        remote_host: impl Into<String>,
        client_address: impl Into<String>,
        user_agent: Option<String>,
        client_id: Option<String>,
    ) -> Self {
        Self {
            remote_address: remote_address.into(),
            remote_host: remote_host.into(),
            client_address: client_address.into(),
            user_agent,
            client_id,
        }
    }

    pub fn remote_address(&self) -> &str {
        &self.remote_address
    }

    pub fn remote_host(&self) -> &str {
        &self.remote_host
    }

    pub fn client_address(&self) -> &str {
        &self.client_address
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn forwarded() -> HttpContext {
        HttpContext::new(
            "10.0.0.5",
            "10.0.0.5",
            "203.0.113.9",
            Some("curl/8.0".to_string()),
            None,
        )
    }

    fn hash_of(ctx: &HttpContext) -> u64 {
        let mut hasher = DefaultHasher::new();
        ctx.hash(&mut hasher);
        hasher.finish()
    }

    // 测试字段按原值读回
    #[test]
    fn test_http_context_accessors() {
        let ctx = forwarded();

        assert_eq!(ctx.remote_address(), "10.0.0.5");
        assert_eq!(ctx.remote_host(), "10.0.0.5");
        assert_eq!(ctx.client_address(), "203.0.113.9");
        assert_eq!(ctx.user_agent(), Some("curl/8.0"));
        assert_eq!(ctx.client_id(), None);
    }

    // 测试 builder 与 new 构造结果一致
    #[test]
    fn test_http_context_builder_matches_new() {
        let built = HttpContext::builder()
            .remote_address("10.0.0.5")
            .remote_host("10.0.0.5")
            .client_address("203.0.113.9")
            .user_agent("curl/8.0")
            .build();

        assert_eq!(built, forwarded());
        assert_eq!(hash_of(&built), hash_of(&forwarded()));
    }

    // 测试 maybe_* 设置器保留缺省语义
    #[test]
    fn test_http_context_builder_maybe_setters() {
        let ctx = HttpContext::builder()
            .remote_address("10.0.0.5")
            .remote_host("gw.internal")
            .client_address("10.0.0.5")
            .maybe_user_agent(None::<String>)
            .maybe_client_id(Some("dashboard"))
            .build();

        assert_eq!(ctx.remote_host(), "gw.internal");
        assert_eq!(ctx.user_agent(), None);
        assert_eq!(ctx.client_id(), Some("dashboard"));
    }

    // 测试空字符串被原样接受，且不等同于缺省
    #[test]
    fn test_http_context_empty_strings_are_present() {
        let ctx = HttpContext::new("", "", "", Some(String::new()), Some(String::new()));

        assert_eq!(ctx.remote_address(), "");
        assert_eq!(ctx.user_agent(), Some(""));
        assert_eq!(ctx.client_id(), Some(""));

        let absent = HttpContext::new("", "", "", None, None);
        assert_ne!(ctx, absent);
    }

    // 测试结构相等
    #[test]
    fn test_http_context_equality() {
        let both_absent_a = HttpContext::new("1.2.3.4", "host", "1.2.3.4", None, None);
        let both_absent_b = HttpContext::new("1.2.3.4", "host", "1.2.3.4", None, None);
        assert_eq!(both_absent_a, both_absent_b);
        assert_eq!(hash_of(&both_absent_a), hash_of(&both_absent_b));

        let present_a = HttpContext::new(
            "1.2.3.4",
            "host",
            "1.2.3.4",
            Some("ua".into()),
            Some("id".into()),
        );
        let present_b = present_a.clone();
        assert_eq!(present_a, present_b);
        assert_eq!(hash_of(&present_a), hash_of(&present_b));
    }

    // 测试任一字段不同即不相等
    #[test]
    fn test_http_context_single_field_difference() {
        let base = HttpContext::new("a", "b", "c", Some("ua".into()), Some("id".into()));

        let variants = [
            HttpContext::new("x", "b", "c", Some("ua".into()), Some("id".into())),
            HttpContext::new("a", "x", "c", Some("ua".into()), Some("id".into())),
            HttpContext::new("a", "b", "x", Some("ua".into()), Some("id".into())),
            HttpContext::new("a", "b", "c", Some("x".into()), Some("id".into())),
            HttpContext::new("a", "b", "c", None, Some("id".into())),
            HttpContext::new("a", "b", "c", Some("ua".into()), Some("x".into())),
            HttpContext::new("a", "b", "c", Some("ua".into()), None),
        ];

        for other in &variants {
            assert_ne!(&base, other);
        }
    }

    // 测试 Debug 输出包含各字段
    #[test]
    fn test_http_context_debug() {
        let text = format!("{:?}", forwarded());

        assert!(text.starts_with("HttpContext"));
        assert!(text.contains("203.0.113.9"));
        assert!(text.contains("curl/8.0"));
        assert!(text.contains("client_id: None"));
    }

    // 测试可在线程间共享读取
    #[test]
    fn test_http_context_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpContext>();

        let ctx = std::sync::Arc::new(forwarded());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ctx = ctx.clone();
                std::thread::spawn(move || ctx.client_address().to_string())
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), "203.0.113.9");
        }
    }
}
