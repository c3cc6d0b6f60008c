pub mod config;
pub mod error;
pub mod http_context_factory;
pub mod query_logger;

pub use config::HttpContextConfig;
pub use http_context_factory::HttpContextFactory;
pub use query_logger::{NoopQueryLogger, QueryLogger, ResponseStatus, TracingQueryLogger};
