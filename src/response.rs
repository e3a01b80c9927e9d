//! Success envelope for API responses.
//!
//! Every 2xx payload is wrapped as `{ "success": true, "data": <payload> }`.
//! The failing counterpart (`{ "success": false, "error": ... }`) is
//! produced centrally by `AppError::error_response`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ApiSuccess::new(vec!["a", "b"]);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], "a");
    }
}
