use serde::{Deserialize, Serialize};

use crate::attachment::PDF_MIME;
use crate::state::Attachment;

/// ========================================
/// Gemini `generateContent` wire protocol
/// ========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload carrying the PDF reference document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub generation_config: GenerationConfig,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// Error body shape returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: RemoteError,
}

#[derive(Debug, Deserialize)]
pub struct RemoteError {
    pub message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any text came back.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let mut out = String::new();
        for part in &candidate.content.parts {
            if let Part::Text { text } = part {
                out.push_str(text);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

/// Assemble one request: the prompt as a text part plus, when present, the
/// attachment as an inline PDF part. Attachment data may arrive in data-URL
/// form; only the base64 payload goes on the wire.
pub fn build_request(
    prompt: &str,
    attachment: Option<&Attachment>,
    system_instruction: &str,
    temperature: f32,
) -> GenerateContentRequest {
    let mut parts = vec![Part::Text {
        text: prompt.to_string(),
    }];
    if let Some(attachment) = attachment {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: PDF_MIME.to_string(),
                data: strip_data_url_prefix(&attachment.encoded_data).to_string(),
            },
        });
    }

    GenerateContentRequest {
        contents: vec![Content { role: None, parts }],
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part::Text {
                text: system_instruction.to_string(),
            }],
        }),
        generation_config: GenerationConfig { temperature },
    }
}

/// Keep only the payload after a `base64,` marker; strings without the
/// marker pass through unmodified.
pub fn strip_data_url_prefix(encoded: &str) -> &str {
    match encoded.split_once("base64,") {
        Some((_, payload)) => payload,
        None => encoded,
    }
}
