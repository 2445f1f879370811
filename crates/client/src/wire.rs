use {
    dispatch_channels::Channel,
    serde::{Deserialize, Serialize},
};

/// Request body for `POST /send`. Built per call and discarded after
/// transmission.
#[derive(Debug, Serialize)]
pub struct MessageRequest<'a> {
    pub channel: Channel,
    pub message: &'a str,
}

/// Response body from the server.
///
/// Only read on non-OK statuses, and only to pull out `error`; success
/// bodies are ignored.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_channel_wire_name_and_verbatim_message() {
        let body = serde_json::to_value(MessageRequest {
            channel: Channel::Commits,
            message: "new commit: fix retry loop",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"channel": "commits", "message": "new commit: fix retry loop"})
        );
    }

    #[test]
    fn response_error_field_is_optional() {
        let resp: MessageResponse =
            serde_json::from_str(r#"{"status":"error","error":"rate limited"}"#).unwrap();
        assert_eq!(resp.status, "error");
        assert_eq!(resp.error.as_deref(), Some("rate limited"));

        let resp: MessageResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(resp.error.is_none());
        assert!(resp.data.is_none());
    }
}
