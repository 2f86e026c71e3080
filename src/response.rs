//! The generic response envelope and the decoder that fills it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Capability required of every destination passed to
/// [`Client::call`](crate::Client::call): accept the two pieces of response
/// metadata the JSON body does not carry, the numeric HTTP status code and
/// the exact body bytes as received.
pub trait Envelope {
    /// Stores the numeric HTTP status code of the response.
    fn set_status_code(&mut self, status_code: u16);

    /// Stores the raw response body, byte for byte.
    fn set_raw(&mut self, raw: Vec<u8>);
}

/// Pagination metadata returned by list endpoints. Absent otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total: i64,
    pub skipped: i64,
    pub per_page: i64,
    pub page: i64,
    pub page_count: i64,
}

/// Generic Paystack response envelope.
///
/// `T` is the endpoint-specific shape of the `data` field: a single record,
/// a `Vec` for list endpoints, or `serde_json::Value` for free-form data.
/// `status_code` and `raw` are never read from JSON; the decoder injects
/// them after deserialization.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    /// Whether the API reports the request as successful.
    pub status: bool,
    /// Human-readable message from the API.
    pub message: String,
    /// Endpoint-specific payload. Absent on most failure envelopes.
    pub data: Option<T>,
    /// Pagination metadata, present on list endpoints only.
    pub meta: Option<Meta>,
    /// Error type, set on failure envelopes.
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    /// Error code, set on failure envelopes.
    pub code: Option<String>,
    /// Numeric HTTP status code, injected by the decoder.
    #[serde(skip)]
    pub status_code: u16,
    /// Exact response body bytes, injected by the decoder.
    #[serde(skip)]
    pub raw: Vec<u8>,
}

// Manual impl: derive(Default) would require T: Default, and `data` is
// already Option.
impl<T> Default for Response<T> {
    fn default() -> Self {
        Self {
            status: false,
            message: String::new(),
            data: None,
            meta: None,
            error_type: None,
            code: None,
            status_code: 0,
            raw: Vec::new(),
        }
    }
}

impl<T> Envelope for Response<T> {
    fn set_status_code(&mut self, status_code: u16) {
        self.status_code = status_code;
    }

    fn set_raw(&mut self, raw: Vec<u8>) {
        self.raw = raw;
    }
}

/// Decodes an HTTP response into `dest`: deserializes the body as JSON, then
/// injects the status code and the raw body bytes.
///
/// Fails on invalid or shape-incompatible JSON; on error the destination's
/// contents are undefined and must not be relied upon.
pub(crate) async fn decode_into<D>(response: reqwest::Response, dest: &mut D) -> Result<(), Error>
where
    D: DeserializeOwned + Envelope,
{
    let status_code = response.status().as_u16();
    let raw = response.bytes().await?;
    *dest = serde_json::from_slice(&raw).map_err(|e| {
        tracing::error!("failed to decode response body: {}", e);
        Error::Decode(e)
    })?;
    dest.set_status_code(status_code);
    dest.set_raw(raw.to_vec());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_envelope_is_zeroed() {
        let resp = Response::<serde_json::Value>::default();
        assert!(!resp.status);
        assert!(resp.message.is_empty());
        assert!(resp.data.is_none());
        assert!(resp.meta.is_none());
        assert_eq!(resp.status_code, 0);
        assert!(resp.raw.is_empty());
    }

    #[test]
    fn deserialize_success_envelope() {
        let json = r#"{"status":true,"message":"Verification successful","data":{"id":1}}"#;
        let resp: Response<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(resp.status);
        assert_eq!(resp.message, "Verification successful");
        assert_eq!(resp.data.unwrap()["id"], 1);
        assert!(resp.error_type.is_none());
        assert!(resp.code.is_none());
        // Skipped fields stay at their defaults until the decoder sets them.
        assert_eq!(resp.status_code, 0);
        assert!(resp.raw.is_empty());
    }

    #[test]
    fn deserialize_failure_envelope_with_type_and_code() {
        let json = r#"{"status":false,"message":"Transaction not found","type":"api_error","code":"transaction_not_found"}"#;
        let resp: Response<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!resp.status);
        assert!(resp.data.is_none());
        assert_eq!(resp.error_type.as_deref(), Some("api_error"));
        assert_eq!(resp.code.as_deref(), Some("transaction_not_found"));
    }

    #[test]
    fn deserialize_meta_camel_case() {
        let json = r#"{"total":3,"skipped":0,"perPage":50,"page":1,"pageCount":1}"#;
        let meta: Meta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.total, 3);
        assert_eq!(meta.skipped, 0);
        assert_eq!(meta.per_page, 50);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.page_count, 1);
    }

    #[test]
    fn envelope_setters() {
        let mut resp = Response::<serde_json::Value>::default();
        resp.set_status_code(201);
        resp.set_raw(b"{}".to_vec());
        assert_eq!(resp.status_code, 201);
        assert_eq!(resp.raw, b"{}");
    }
}
