use serde::{Deserialize, Serialize};

/// Operands for `POST /api/suma`.
///
/// Both the upper-case and lower-case field names bind, so camelCase clients
/// (`{"a": 1, "b": 2}`) work the same as `{"A": 1, "B": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SumaRequest {
    #[serde(rename = "A", alias = "a")]
    pub a: i32,
    #[serde(rename = "B", alias = "b")]
    pub b: i32,
}

impl SumaRequest {
    /// Two's-complement sum; overflow wraps instead of failing.
    pub fn sum(self) -> i32 {
        self.a.wrapping_add(self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumaResponse {
    pub resultado: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body returned with every 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
