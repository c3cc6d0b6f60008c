use std::fmt;

use querylog_domain::{HttpContext, QueryContext};

/// 查询最终响应的摘要
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseStatus {
    pub errors: usize,
    pub series: usize,
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errors={} series={}", self.errors, self.series)
    }
}

/// 查询日志
///
/// 在查询的各个阶段读取 `QueryContext`（含 HTTP 来源）生成结构化日志条目。
/// 实现需可在多个请求处理任务间共享。
pub trait QueryLogger: Send + Sync {
    /// 以文本形式提交的查询
    fn log_http_query_text(&self, ctx: &QueryContext, query: &str);

    /// 以 JSON 形式提交的查询
    fn log_http_query_json(&self, ctx: &QueryContext, query: &serde_json::Value);

    /// 查询的最终响应
    fn log_final_response(&self, ctx: &QueryContext, status: ResponseStatus);
}

/// 基于 `tracing` 的查询日志，事件 target 为 `querylog`
///
/// 每个阶段输出一条 info 事件，字段包括 `component`、`query_id`、`stage`、
/// 五个来源字段（上下文无 HTTP 来源或可选字段缺失时不输出）以及 `data`。
#[derive(Debug, Clone)]
pub struct TracingQueryLogger {
    component: String,
}

impl TracingQueryLogger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    fn emit(&self, ctx: &QueryContext, stage: &'static str, data: &dyn fmt::Display) {
        let http = ctx.http_context();

        tracing::info!(
            target: "querylog",
            component = %self.component,
            query_id = %ctx.query_id(),
            stage,
            remote_address = http.map(HttpContext::remote_address),
            remote_host = http.map(HttpContext::remote_host),
            client_address = http.map(HttpContext::client_address),
            user_agent = http.and_then(HttpContext::user_agent),
            client_id = http.and_then(HttpContext::client_id),
            data = %data,
            "query log"
        );
    }
}

impl QueryLogger for TracingQueryLogger {
    fn log_http_query_text(&self, ctx: &QueryContext, query: &str) {
        self.emit(ctx, "http_query_text", &query);
    }

    fn log_http_query_json(&self, ctx: &QueryContext, query: &serde_json::Value) {
        self.emit(ctx, "http_query_json", query);
    }

    fn log_final_response(&self, ctx: &QueryContext, status: ResponseStatus) {
        self.emit(ctx, "final_response", &status);
    }
}

/// 丢弃所有条目
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopQueryLogger;

impl QueryLogger for NoopQueryLogger {
    fn log_http_query_text(&self, _ctx: &QueryContext, _query: &str) {}

    fn log_http_query_json(&self, _ctx: &QueryContext, _query: &serde_json::Value) {}

    fn log_final_response(&self, _ctx: &QueryContext, _status: ResponseStatus) {}
}
