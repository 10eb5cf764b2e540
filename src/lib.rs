pub mod cli;
pub mod error;
pub mod protocol;
pub mod render;
pub mod sse;
pub mod state;
pub mod ui;

use std::io::{self, Write};
use std::time::Duration;

use colored::*;
use reqwest::Client;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

use error::ControllerError;
use protocol::{EmailRequest, FormInput, StreamEvent, SubmissionResult};
use sse::SseDecoder;
use state::{Labels, Phase, Submission};
use ui::UiEvent;

/// How long the transient error banner stays up before auto-dismissal.
pub const ERROR_BANNER_DISMISS: Duration = Duration::from_secs(5);
/// Exit delay before the email prompt closes after a successful send.
pub const EMAIL_CLOSE_DELAY: Duration = Duration::from_millis(1500);

const EMAIL_ACTION_LABEL: &str = "Email My Blueprint";
const EMAIL_SENDING_LABEL: &str = "Sending...";
const EMAIL_SENT_LABEL: &str = "Sent!";

// ---------------------------------------------------------------------------
// FormController: submission lifecycle, stream consumption, email sub-flow
// ---------------------------------------------------------------------------

/// Drives one branding-form submission at a time: posts the form, consumes
/// the event stream, renders partial content incrementally, and offers the
/// email sub-flow once a result exists.
///
/// Frontends attach through `ui_tx`; when no channel is set, streamed
/// fragments are printed to stdout and lifecycle events go through the
/// terminal adapter in [`ui`].
pub struct FormController {
    client: Client,
    base_url: String,
    pub phase: Phase,
    /// Re-entrancy guard: true for the duration of one submit-to-completion
    /// cycle. A submit while set is ignored, not queued.
    pub is_submitting: bool,
    /// Overwritten on every successful submission; read by the email flow.
    pub current_results: Option<SubmissionResult>,
    /// Last progress value received, retained across the attempt.
    pub last_progress: Option<u8>,
    pub labels: Labels,
    /// When set, UI effects are sent here instead of printed to the terminal.
    pub ui_tx: Option<mpsc::UnboundedSender<UiEvent>>,
}

impl FormController {
    pub fn new(base_url: impl Into<String>) -> Self {
        FormController {
            client: Client::new(),
            base_url: base_url.into(),
            phase: Phase::Idle,
            is_submitting: false,
            current_results: None,
            last_progress: None,
            labels: Labels::default(),
            ui_tx: None,
        }
    }

    fn emit(&self, event: UiEvent) {
        if let Some(tx) = &self.ui_tx {
            let _ = tx.send(event);
        } else {
            ui::print_event(&event);
        }
    }

    // -----------------------------------------------------------------------
    // Submission lifecycle
    // -----------------------------------------------------------------------

    /// Submit the form and consume the resulting event stream to completion.
    ///
    /// A call while another submission is in flight is ignored without
    /// touching the in-flight request. All failures have their user-visible
    /// recovery applied (label reset, transient banner) before the error is
    /// returned to the caller.
    pub async fn submit(&mut self, input: &FormInput) -> Result<(), ControllerError> {
        if self.is_submitting {
            tracing::warn!("submit ignored: a submission is already in flight");
            return Ok(());
        }
        self.begin_submission();

        match self.stream_branding(input).await {
            Ok(submission) => self.complete_submission(submission),
            Err(err) => {
                self.fail_submission(&err);
                Err(err)
            }
        }
    }

    fn begin_submission(&mut self) {
        self.is_submitting = true;
        self.phase = Phase::Submitting;
        self.last_progress = None;
        self.emit(UiEvent::SubmitControl {
            label: self.labels.in_progress.clone(),
            enabled: false,
        });
        self.emit(UiEvent::ResetResults);
    }

    async fn stream_branding(
        &mut self,
        input: &FormInput,
    ) -> Result<Submission, ControllerError> {
        tracing::debug!(company = %input.company_name, "posting form to /branding");
        let response = self
            .client
            .post(format!("{}/branding", self.base_url))
            .header("Accept", "text/event-stream")
            .json(input)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ControllerError::HttpStatus(response.status()));
        }

        self.phase = Phase::Streaming;
        let mut stream = response.bytes_stream();
        let mut decoder = SseDecoder::new();
        let mut submission = Submission::new();

        // No timeout here: a stalled upstream stalls the attempt. The guard
        // keeps a second submission from piling on top. Chunks go to the
        // decoder as raw bytes; it only decodes text per complete frame, so
        // a chunk ending inside a multi-byte character is harmless.
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            for event in decoder.feed(&chunk)? {
                self.on_stream_event(&event, &mut submission)?;
            }
        }
        if let Some(event) = decoder.finish()? {
            self.on_stream_event(&event, &mut submission)?;
        }

        Ok(submission)
    }

    /// Apply one decoded stream event: server errors terminate the attempt,
    /// progress updates the in-progress UI while below 100, and content
    /// fragments trigger a full replace-in-place re-render. An event carrying
    /// several fields applies all of them.
    pub fn on_stream_event(
        &mut self,
        event: &StreamEvent,
        submission: &mut Submission,
    ) -> Result<(), ControllerError> {
        tracing::debug!(?event, "stream event");
        let rendered = submission.apply(event).map_err(ControllerError::Upstream)?;

        if let Some(progress) = event.progress {
            self.last_progress = Some(progress);
            if progress < 100 {
                self.emit(UiEvent::Progress { percent: progress });
            }
        }

        if let Some(html) = rendered {
            if self.ui_tx.is_some() {
                self.emit(UiEvent::RenderContent { html });
            } else {
                // Terminal mode: fragments print incrementally instead of
                // re-printing the whole render each time.
                print!("{}", event.content.as_deref().unwrap_or(""));
                let _ = io::stdout().flush();
            }
        }

        Ok(())
    }

    /// Resolve the attempt at stream end. A final-marked payload wins over
    /// the accumulated buffer; a stream that produced neither is a failure.
    pub fn finish_stream(&mut self, submission: Submission) -> Result<(), ControllerError> {
        self.complete_submission(submission)
    }

    fn complete_submission(&mut self, submission: Submission) -> Result<(), ControllerError> {
        self.is_submitting = false;
        let Some(outcome) = submission.outcome() else {
            let err = ControllerError::Upstream("stream ended without content".to_string());
            self.fail_submission(&err);
            return Err(err);
        };

        tracing::debug!(authoritative = submission.has_final(), "submission completed");
        self.emit(UiEvent::RenderContent { html: outcome.insights.clone() });
        self.emit(UiEvent::SubmitControl {
            label: self.labels.done.clone(),
            enabled: self.labels.reenable_on_success,
        });
        self.emit(UiEvent::ShowEmailAction);
        self.current_results = Some(outcome);
        self.phase = Phase::Completed;
        Ok(())
    }

    fn fail_submission(&mut self, err: &ControllerError) {
        tracing::error!(error = %err, "submission failed");
        self.is_submitting = false;
        self.phase = Phase::Failed;
        self.emit(UiEvent::SubmitControl {
            label: self.labels.idle.clone(),
            enabled: true,
        });
        self.emit(UiEvent::ErrorBanner {
            message: err.user_message(),
            dismiss_after: ERROR_BANNER_DISMISS,
        });
    }

    // -----------------------------------------------------------------------
    // Email sub-flow
    // -----------------------------------------------------------------------

    /// Open the email prompt. Rejected with a visible notice, and without any
    /// network traffic, when no completed result exists yet.
    pub fn open_email_prompt(&mut self) -> Result<(), ControllerError> {
        if self.current_results.is_none() {
            self.emit(UiEvent::Notice {
                message: "No insights available to email. Please generate insights first."
                    .to_string(),
            });
            return Err(ControllerError::MissingResults);
        }
        self.emit(UiEvent::OpenEmailPrompt);
        Ok(())
    }

    /// Send the completed insights to `/email-results`. On failure the
    /// message lands on the email control itself, which stays retry-able.
    pub async fn submit_email(
        &mut self,
        name: &str,
        email: &str,
    ) -> Result<(), ControllerError> {
        let Some(results) = &self.current_results else {
            self.emit(UiEvent::Notice {
                message: "No insights available to email. Please generate insights first."
                    .to_string(),
            });
            return Err(ControllerError::MissingResults);
        };
        let request = EmailRequest {
            name: name.to_string(),
            email: email.to_string(),
            insights: results.insights.clone(),
        };

        self.emit(UiEvent::EmailControl {
            label: EMAIL_SENDING_LABEL.to_string(),
            enabled: false,
        });

        match self.send_email(&request).await {
            Ok(()) => {
                tracing::info!(to = %email, "blueprint emailed");
                self.emit(UiEvent::EmailControl {
                    label: EMAIL_SENT_LABEL.to_string(),
                    enabled: false,
                });
                self.emit(UiEvent::CloseEmailPrompt { after: Some(EMAIL_CLOSE_DELAY) });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "email delivery failed");
                self.emit(UiEvent::EmailControl {
                    label: format!("{} (failed: {})", EMAIL_ACTION_LABEL, err.user_message()),
                    enabled: true,
                });
                Err(err)
            }
        }
    }

    /// Manual dismissal of the email prompt.
    pub fn close_email_prompt(&mut self) {
        self.emit(UiEvent::CloseEmailPrompt { after: None });
    }

    async fn send_email(&self, request: &EmailRequest) -> Result<(), ControllerError> {
        let response = self
            .client
            .post(format!("{}/email-results", self.base_url))
            .json(request)
            .send()
            .await?;
        // Any 2xx is success; the body is not inspected.
        if !response.status().is_success() {
            return Err(ControllerError::HttpStatus(response.status()));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Terminal chrome
    // -----------------------------------------------------------------------

    pub fn print_header(&self, input: &FormInput) {
        println!("{}", "BRANDING BLUEPRINT".bright_cyan().bold());
        println!("{}: {}", "Company".bright_yellow(), input.company_name);
        println!("{}: {}", "Audience".bright_yellow(), input.target_audience);
        println!("{}: {}", "Endpoint".bright_yellow(), self.base_url);
        println!("{}", "=".repeat(50).bright_blue());
        println!();
    }

    pub fn print_footer(&self) {
        println!("\n{}", "=".repeat(50).bright_blue());
        if let Some(results) = &self.current_results {
            println!("Complete! Blueprint is {} characters.", results.insights.len());
        }
        if let Some(progress) = self.last_progress {
            println!("Final reported progress: {}%.", progress);
        }
    }
}
