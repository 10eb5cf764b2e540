use clap::Parser;
use std::env;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Environment variable that overrides the default service endpoint.
pub const ENDPOINT_ENV_VAR: &str = "BLUEPRINT_API_URL";

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(version = "1.2.0")]
#[command(about = "Stream a Branding Blueprint for your company from the insight service")]
pub struct Args {
    /// Company name
    pub company_name: String,

    /// Target audience the brand should speak to
    pub target_audience: String,

    /// Short description of what the company does
    pub company_description: String,

    /// Contact email submitted with the form
    pub email: String,

    /// Base URL of the insight service
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Email the completed blueprint to this address after streaming
    #[arg(long)]
    pub email_to: Option<String>,

    /// Recipient name for the emailed blueprint (defaults to the company name)
    #[arg(long)]
    pub email_name: Option<String>,

    /// Print the rendered HTML result after the stream completes
    #[arg(long)]
    pub html: bool,
}

/// Pick the service endpoint: an explicit `--endpoint` wins, then the
/// `BLUEPRINT_API_URL` environment variable, then the built-in default.
/// A trailing slash is stripped so path joins stay clean.
pub fn resolve_endpoint(endpoint: &str) -> String {
    let chosen = if endpoint == DEFAULT_ENDPOINT {
        env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| endpoint.to_string())
    } else {
        endpoint.to_string()
    };
    chosen.trim_end_matches('/').to_string()
}
