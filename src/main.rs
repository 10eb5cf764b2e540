use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use blueprint_client::cli::{resolve_endpoint, Args};
use blueprint_client::protocol::FormInput;
use blueprint_client::FormController;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let endpoint = resolve_endpoint(&args.endpoint);

    let input = FormInput {
        company_name: args.company_name.clone(),
        target_audience: args.target_audience,
        company_description: args.company_description,
        email: args.email,
    };

    let mut controller = FormController::new(&endpoint);
    controller.print_header(&input);

    // The failure path already surfaces the error through the banner event,
    // so the binary only sets the exit code here.
    if controller.submit(&input).await.is_err() {
        std::process::exit(1);
    }

    controller.print_footer();

    if args.html {
        if let Some(results) = &controller.current_results {
            println!("\n{}", results.insights);
        }
    }

    if let Some(to) = args.email_to {
        let name = args.email_name.unwrap_or(args.company_name);
        if controller.open_email_prompt().is_err() {
            std::process::exit(1);
        }
        match controller.submit_email(&name, &to).await {
            Ok(()) => println!("{} {}", "Blueprint emailed to".bright_green(), to),
            Err(e) => {
                eprintln!("{} {}", "Email failed:".bright_red(), e);
                std::process::exit(1);
            }
        }
    }
}
