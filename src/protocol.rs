use serde::{Deserialize, Serialize};

// -- /branding request ------------------------------------------------------

/// User-supplied form fields, sent as the `/branding` request body.
/// Required-field presence is enforced upstream (markup / CLI); the wire
/// format carries whatever strings the user provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInput {
    pub company_name: String,
    pub target_audience: String,
    pub company_description: String,
    pub email: String,
}

// -- /branding SSE events ---------------------------------------------------

/// One decoded `data:` payload from the branding event stream.
///
/// Every field is independently optional. In practice the server populates
/// one semantic role per event, but an event may carry `progress` and
/// `content` together and both must be applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamEvent {
    /// A text fragment, or the complete result when `final` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Marks `content` as the authoritative complete result.
    #[serde(rename = "final", skip_serializing_if = "Option::is_none")]
    pub is_final: Option<bool>,
    /// Server-side completion percentage, 0–100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    /// Terminating failure reported by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StreamEvent {
    /// True when `content` carries the final, authoritative result.
    pub fn is_final_content(&self) -> bool {
        self.is_final.unwrap_or(false)
    }
}

// -- Outcome of one submission ----------------------------------------------

/// The completed result of one submission: HTML-safe text ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub insights: String,
}

// -- /email-results request --------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    pub name: String,
    pub email: String,
    pub insights: String,
}
