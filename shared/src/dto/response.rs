use serde::{Deserialize, Serialize};

/// Error payload returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

/// Response envelope: every endpoint answers `{ "data": ... }` or `{ "error": { "message": ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Collapse the envelope. An error payload wins over data; a body with neither
    /// is reported as an error too.
    pub fn into_result(self) -> Result<T, String> {
        match (self.error, self.data) {
            (Some(err), _) => Err(err.message),
            (None, Some(data)) => Ok(data),
            (None, None) => Err("Response contained neither data nor error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_wins() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{ "data": [1], "error": { "message": "Unauthorized" } }"#).unwrap();
        assert_eq!(resp.into_result(), Err("Unauthorized".to_string()));
    }

    #[test]
    fn test_empty_envelope_is_error() {
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str("{}").unwrap();
        assert!(resp.into_result().is_err());
    }
}
