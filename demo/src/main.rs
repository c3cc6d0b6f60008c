use std::net::SocketAddr;

use http::{HeaderMap, HeaderValue};
use querylog_application::error::AppError;
use querylog_application::{
    HttpContextConfig, HttpContextFactory, QueryLogger, ResponseStatus, TracingQueryLogger,
};
use querylog_domain::{HttpContext, QueryContext};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,querylog_application=trace")),
        )
        .init();

    let config = HttpContextConfig::from_json(r#"{ "client_id_header": "x-client-id" }"#)?;
    let factory = HttpContextFactory::new(&config)?;
    let logger = TracingQueryLogger::new("api");

    // 经过代理的请求
    let peer = SocketAddr::from(([10, 0, 0, 5], 41234));
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.9"));
    headers.insert("user-agent", HeaderValue::from_static("curl/8.0"));

    let ctx = QueryContext::new(factory.create(peer, None, &headers));
    logger.log_http_query_text(&ctx, "average(size=1m) by host");
    logger.log_final_response(
        &ctx,
        ResponseStatus {
            errors: 0,
            series: 3,
        },
    );
    println!("forwarded: {:?}", ctx.http_context());

    // 直连请求，携带客户端 ID
    let peer = SocketAddr::from(([192, 0, 2, 10], 55012));
    let mut headers = HeaderMap::new();
    headers.insert("x-client-id", HeaderValue::from_static("dashboard"));

    let ctx = QueryContext::new(factory.create(peer, Some("grafana.internal"), &headers));
    logger.log_http_query_json(&ctx, &serde_json::json!({ "filter": ["key", "cpu"] }));
    println!("direct: {:?}", ctx.http_context());

    // 手动构造，与工厂结果按值比较
    let manual = HttpContext::builder()
        .remote_address("192.0.2.10")
        .remote_host("grafana.internal")
        .client_address("192.0.2.10")
        .client_id("dashboard")
        .build();
    println!("equal to manual: {}", ctx.http_context() == Some(&manual));

    // 系统内部发起的查询没有 HTTP 来源
    let internal = QueryContext::empty();
    logger.log_http_query_text(&internal, "count()");

    tracing::info!(component = logger.component(), "demo finished");
    Ok(())
}
