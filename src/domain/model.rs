use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One service as described by the metadata endpoint.
///
/// The object is kept verbatim; only `serviceName` and `usage` are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceRecord {
    pub data: Map<String, Value>,
}

impl ServiceRecord {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.field("serviceName").and_then(Value::as_str)
    }

    pub fn usage(&self) -> Option<&Value> {
        self.field("usage")
    }

    /// 表格列的鍵值，不保證唯一
    pub fn display_key(&self) -> &str {
        self.service_name().unwrap_or_default()
    }
}

impl From<Map<String, Value>> for ServiceRecord {
    fn from(data: Map<String, Value>) -> Self {
        Self::new(data)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServicesState {
    pub did_invalidate: bool,
    pub services: Vec<ServiceRecord>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub services: ServicesState,
}
