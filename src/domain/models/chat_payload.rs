use serde::{Deserialize, Serialize};

use super::PendingAttachment;

pub const DEFAULT_CONTEXT: &str = "general";

/// Body of `POST /chat` as sent by the client.
///
/// `files` is omitted entirely when nothing is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_context")]
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PendingAttachment>>,
}

impl ChatRequest {
    pub fn new(
        message: impl Into<String>,
        context: impl Into<String>,
        session_id: impl Into<String>,
        attachments: &[PendingAttachment],
    ) -> Self {
        Self {
            message: message.into(),
            context: context.into(),
            session_id: Some(session_id.into()),
            files: if attachments.is_empty() {
                None
            } else {
                Some(attachments.to_vec())
            },
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.as_ref().map_or(0, Vec::len)
    }
}

fn default_context() -> String {
    DEFAULT_CONTEXT.to_string()
}

/// Body returned by `POST /chat`. Clients only rely on `response`; the other
/// fields are diagnostics filled in by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub context_used: Option<String>,
    #[serde(default)]
    pub ai_source: Option<String>,
    #[serde(default)]
    pub processing_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_omitted_without_attachments() {
        let request = ChatRequest::new("hello", "documents", "BRG-123456789", &[]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["message"], "hello");
        assert_eq!(json["context"], "documents");
        assert_eq!(json["session_id"], "BRG-123456789");
        assert!(json.get("files").is_none());
    }

    #[test]
    fn test_files_present_with_attachments() {
        let attachments = vec![
            PendingAttachment::new("minutes.docx", "application/msword", 1000),
            PendingAttachment::new("site.png", "image/png", 2000),
        ];
        let request = ChatRequest::new("check these", "general", "BRG-1", &attachments);
        let json = serde_json::to_value(&request).unwrap();

        let files = json["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["type"], "application/msword");
        assert_eq!(files[1]["name"], "site.png");
        assert_eq!(request.file_count(), 2);
    }

    #[test]
    fn test_request_defaults_when_deserializing() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(request.context, "general");
        assert!(request.session_id.is_none());
        assert_eq!(request.file_count(), 0);
    }

    #[test]
    fn test_response_requires_response_field() {
        assert!(serde_json::from_str::<ChatResponse>(r#"{"reply":"x"}"#).is_err());

        let response: ChatResponse = serde_json::from_str(r#"{"response":"ok"}"#).unwrap();
        assert_eq!(response.response, "ok");
        assert!(response.ai_source.is_none());
    }
}
