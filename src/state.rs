use crate::protocol::{StreamEvent, SubmissionResult};
use crate::render::render_markdown;

// ---------------------------------------------------------------------------
// Submission lifecycle
// ---------------------------------------------------------------------------

/// Where one submission currently stands.
///
/// `Completed` and `Failed` are terminal for the attempt; `Failed` leaves the
/// submit control re-enabled so the user may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Streaming,
    Completed,
    Failed,
}

// ---------------------------------------------------------------------------
// Submit-control labels
// ---------------------------------------------------------------------------

/// Submit-control wording plus the one behavioral variation between the two
/// flows of the original page, expressed as a flag instead of a second code
/// path.
#[derive(Debug, Clone)]
pub struct Labels {
    pub idle: String,
    pub in_progress: String,
    pub done: String,
    /// When true the submit control is re-enabled after a successful run
    /// instead of staying on the permanent done label.
    pub reenable_on_success: bool,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            idle: "Build Blueprint".to_string(),
            in_progress: "Building...".to_string(),
            done: "Blueprint Built!".to_string(),
            reenable_on_success: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-attempt accumulation
// ---------------------------------------------------------------------------

/// Mutable record for one submit-to-completion cycle: the fragment buffer,
/// an authoritative final payload once one arrives, and the last progress
/// value seen.
#[derive(Debug, Default)]
pub struct Submission {
    buffer: String,
    final_content: Option<String>,
    pub progress: Option<u8>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one decoded event. Every populated field takes effect: a server
    /// error terminates the attempt, progress is retained, non-final content
    /// extends the buffer, final content supersedes it.
    ///
    /// Returns the full re-rendered buffer when a non-final fragment arrived,
    /// so the caller can replace the displayed content in place.
    pub fn apply(&mut self, event: &StreamEvent) -> Result<Option<String>, String> {
        if let Some(message) = &event.error {
            return Err(message.clone());
        }

        if let Some(progress) = event.progress {
            self.progress = Some(progress);
        }

        if let Some(content) = &event.content {
            if event.is_final_content() {
                self.final_content = Some(content.clone());
            } else {
                self.buffer.push_str(content);
                return Ok(Some(render_markdown(&self.buffer)));
            }
        }

        Ok(None)
    }

    /// Resolve the result at stream end: the final-marked payload when one
    /// arrived (it is already rendered server-side), otherwise a render of
    /// the accumulated fragments. Empty when the stream produced nothing.
    pub fn outcome(&self) -> Option<SubmissionResult> {
        if let Some(final_content) = &self.final_content {
            return Some(SubmissionResult { insights: final_content.clone() });
        }
        if self.buffer.is_empty() {
            return None;
        }
        Some(SubmissionResult { insights: render_markdown(&self.buffer) })
    }

    pub fn accumulated(&self) -> &str {
        &self.buffer
    }

    pub fn has_final(&self) -> bool {
        self.final_content.is_some()
    }
}
