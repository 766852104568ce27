//! Result page models.

use serde::Serialize;
use std::fmt;

/// Which result set a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Messages,
    Records,
}

impl ResultKind {
    /// Path segment under `/v1/search/jobs/{id}/`.
    pub const fn path_segment(&self) -> &'static str {
        match self {
            ResultKind::Messages => "messages",
            ResultKind::Records => "records",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// One fetched page. `body` is the API payload, passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBatch {
    pub kind: ResultKind,
    pub offset: u64,
    pub limit: u32,
    pub body: serde_json::Value,
}

impl ResultBatch {
    /// Number of items in the page (`messages` or `records` array length).
    pub fn len(&self) -> usize {
        self.body
            .get(self.kind.path_segment())
            .and_then(|v| v.as_array())
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_kind_array() {
        let batch = ResultBatch {
            kind: ResultKind::Records,
            offset: 0,
            limit: 10,
            body: serde_json::json!({
                "fields": [{"name": "_count", "fieldType": "int", "keyField": false}],
                "records": [{"map": {"_count": "90"}}, {"map": {"_count": "3"}}]
            }),
        };
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_len_is_zero_when_array_missing() {
        let batch = ResultBatch {
            kind: ResultKind::Messages,
            offset: 0,
            limit: 10,
            body: serde_json::json!({"fields": []}),
        };
        assert!(batch.is_empty());
    }
}
