use std::fmt;
use std::str::FromStr;

use querylog_macros::value_object;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::http_context::HttpContext;

/// 查询 ID
///
/// 在一次查询经过的各个阶段（接入、分片请求、最终响应）之间关联日志。
///
/// ```
/// use querylog_domain::QueryId;
///
/// let id: QueryId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
/// assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
/// ```
#[value_object(default = false, hash = true)]
#[derive(Copy)]
pub struct QueryId(Uuid);

impl QueryId {
    /// 生成新的随机 ID（UUID v4）
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for QueryId {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for QueryId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

/// 查询上下文
///
/// 一次查询的标识及其 HTTP 来源；由系统内部发起的查询没有 HTTP 来源。
#[value_object(default = false)]
pub struct QueryContext {
    query_id: QueryId,
    http_context: Option<HttpContext>,
}

impl QueryContext {
    /// 为来自 HTTP 的查询创建上下文，并分配新的查询 ID
    pub fn new(http_context: HttpContext) -> Self {
        Self::with_query_id(QueryId::new(), Some(http_context))
    }

    /// 没有 HTTP 来源的上下文
    pub fn empty() -> Self {
        Self::with_query_id(QueryId::new(), None)
    }

    pub fn with_query_id(query_id: QueryId, http_context: Option<HttpContext>) -> Self {
        Self {
            query_id,
            http_context,
        }
    }

    pub fn query_id(&self) -> QueryId {
        self.query_id
    }

    pub fn http_context(&self) -> Option<&HttpContext> {
        self.http_context.as_ref()
    }
}
