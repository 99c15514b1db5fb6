use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of the input JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: Map<String, Value>,
}

/// Result of re-keying an input array: one entry per surviving identifier.
#[derive(Debug, Clone)]
pub struct RekeyedData {
    pub entries: Map<String, Value>,
    pub record_count: usize,
}
