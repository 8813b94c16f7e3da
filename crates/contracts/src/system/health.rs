use serde::{Deserialize, Serialize};

pub const HEALTHY_MESSAGE: &str = "API is healthy";

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            message: HEALTHY_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert_eq!(json, r#"{"message":"API is healthy"}"#);
    }
}
