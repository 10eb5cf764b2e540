use std::time::Duration;

use colored::*;

/// One UI effect emitted by the controller, consumed by whatever frontend is
/// attached (terminal adapter here; a DOM adapter would map these onto
/// element updates). The controller never touches a frontend directly.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Set the submit control's label and enabled state.
    SubmitControl { label: String, enabled: bool },
    /// Clear the results area and reveal the results section.
    ResetResults,
    /// Replace the streaming container's content in place.
    RenderContent { html: String },
    /// In-progress percentage from the server, 0–100.
    Progress { percent: u8 },
    /// Reveal the email action next to the completed result.
    ShowEmailAction,
    /// Transient error banner adjacent to the results area.
    ErrorBanner { message: String, dismiss_after: Duration },
    /// Blocking notice with no side effects (email validation).
    Notice { message: String },
    /// Open the email prompt form.
    OpenEmailPrompt,
    /// Set the email control's label and enabled state. On failure the
    /// message lands here, not on a global banner.
    EmailControl { label: String, enabled: bool },
    /// Close the email prompt, optionally after a brief exit delay.
    CloseEmailPrompt { after: Option<Duration> },
}

/// Render one event to the terminal. The streaming content itself is printed
/// incrementally by the controller's fallback path; this handles the
/// lifecycle chrome when a channel-driven frontend wants terminal output.
pub fn print_event(event: &UiEvent) {
    match event {
        UiEvent::SubmitControl { label, enabled } => {
            let state = if *enabled { "ready" } else { "disabled" };
            println!("{} {} ({})", "[submit]".bright_yellow(), label, state);
        }
        UiEvent::ResetResults => {
            println!("{}", "=".repeat(50).bright_blue());
        }
        UiEvent::RenderContent { html } => {
            println!("{}", html);
        }
        UiEvent::Progress { percent } => {
            eprint!("\r{} {}%", "[progress]".bright_cyan(), percent);
        }
        UiEvent::ShowEmailAction => {
            println!("{}", "[email] Email My Blueprint is now available".bright_green());
        }
        UiEvent::ErrorBanner { message, .. } => {
            eprintln!("{} {}", "[error]".bright_red(), message);
        }
        UiEvent::Notice { message } => {
            println!("{} {}", "[notice]".bright_white(), message);
        }
        UiEvent::OpenEmailPrompt => {
            println!("{}", "[email] prompt opened".bright_green());
        }
        UiEvent::EmailControl { label, enabled } => {
            let state = if *enabled { "ready" } else { "disabled" };
            println!("{} {} ({})", "[email]".bright_green(), label, state);
        }
        UiEvent::CloseEmailPrompt { .. } => {
            println!("{}", "[email] prompt closed".bright_green());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_control_equality() {
        let a = UiEvent::SubmitControl { label: "Building...".to_string(), enabled: false };
        let b = UiEvent::SubmitControl { label: "Building...".to_string(), enabled: false };
        assert_eq!(a, b);
    }

    #[test]
    fn test_banner_carries_dismiss_duration() {
        let ev = UiEvent::ErrorBanner {
            message: "HTTP error! status: 500".to_string(),
            dismiss_after: Duration::from_secs(5),
        };
        match ev {
            UiEvent::ErrorBanner { dismiss_after, .. } => {
                assert_eq!(dismiss_after, Duration::from_secs(5));
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_print_event_no_crash() {
        print_event(&UiEvent::ResetResults);
        print_event(&UiEvent::Progress { percent: 50 });
        print_event(&UiEvent::Notice { message: "hi".to_string() });
        print_event(&UiEvent::CloseEmailPrompt { after: Some(Duration::from_millis(1500)) });
    }
}
