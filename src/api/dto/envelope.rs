//! Standard `{status, data}` response envelope.

use serde::{Deserialize, Serialize};

/// Outcome marker of an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Err,
}

/// Wrapper for every JSON body the API returns.
///
/// ```json
/// { "status": "ok", "data": { "shortURL": "http://localhost:8080/ABC1" } }
/// { "status": "err", "data": { "message": "`url` is a non-string or missing" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub data: T,
}

/// Payload of an `err` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: Status::Ok,
            data,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl Envelope<ErrorData> {
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            status: Status::Err,
            data: ErrorData {
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        let envelope = Envelope::ok(json!({ "hello": "world" }));

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "status": "ok", "data": { "hello": "world" } })
        );
    }

    #[test]
    fn test_err_envelope_shape() {
        let envelope = Envelope::err("Shortened URL does not exist");

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "status": "err", "data": { "message": "Shortened URL does not exist" } })
        );
    }

    #[test]
    fn test_deserialize_status() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"status":"err","data":{"message":"x"}}"#).unwrap();

        assert!(!envelope.is_ok());
        assert_eq!(envelope.data["message"], "x");
    }
}
