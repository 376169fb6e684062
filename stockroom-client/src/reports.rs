//! Dashboard and reports

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;
use shared::PageEnvelope;
use shared::models::DashboardSummary;

use crate::client::HttpClient;
use crate::query::ListQuery;
use crate::{ClientError, ClientResult};

/// Report served under `/api/reports/{kind}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Inventory,
    Employees,
    Sales,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Employees => "employees",
            Self::Sales => "sales",
        }
    }

    pub fn path(self) -> String {
        format!("/api/reports/{}", self.as_str())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inventory" => Ok(Self::Inventory),
            "employees" => Ok(Self::Employees),
            "sales" => Ok(Self::Sales),
            other => Err(ClientError::Config(format!("unknown report: {}", other))),
        }
    }
}

/// Read-only summary endpoints
pub struct ReportsApi<C> {
    client: Arc<C>,
}

impl<C: HttpClient> ReportsApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Headline figures; accepts the summary bare or wrapped in `{data}`
    pub async fn dashboard(&self) -> ClientResult<DashboardSummary> {
        let value: Value = self.client.get("/api/dashboard").await?;
        let value = match value {
            Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
                map.remove("data").unwrap_or_default()
            }
            other => other,
        };
        serde_json::from_value(value)
            .map_err(|e| ClientError::InvalidResponse(format!("dashboard: {}", e)))
    }

    /// One page of a report; rows are left as JSON objects
    pub async fn report(&self, kind: ReportKind, query: &ListQuery) -> ClientResult<PageEnvelope<Value>> {
        let value: Value = self.client.get(&query.to_path(&kind.path())).await?;
        PageEnvelope::from_value(value, query.page, query.limit)
            .map_err(|e| ClientError::InvalidResponse(format!("{} report: {}", kind, e)))
    }
}
