//! Command line entry point for the companies console.

use std::future::Future;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use companies_console::client::{ApiClient, ApiClientError};
use companies_console::render::{self, ColorMode, TermKind};
use companies_console::view::ViewState;
use reqwest::Url;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "companies-console",
    version,
    about = "Console views over the companies analytics API"
)]
struct Cli {
    /// Base URL the API is served from.
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: Url,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Colour palette for the terminal output.
    #[arg(long, value_enum, default_value_t = ColorMode::Dark)]
    mode: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show how many companies are stored.
    Count,
    /// List the highest-paying companies by base salary.
    TopPaid {
        /// How many companies to request; the server clamps to its cap.
        #[arg(long)]
        limit: Option<i64>,
    },
    /// List companies with a headcount inside an inclusive range.
    HeadcountRange {
        /// Lower bound; the server treats an absent bound as 0.
        #[arg(long)]
        min: Option<i64>,
        /// Upper bound; absent means unbounded.
        #[arg(long)]
        max: Option<i64>,
    },
    /// List companies whose location contains the term.
    ByLocation {
        /// Substring to match, case-insensitively.
        location: String,
    },
    /// List companies hiring for a skill.
    BySkill {
        /// Skill to match exactly.
        skill: String,
    },
    /// List companies offering a benefit.
    ByBenefit {
        /// Benefit to match exactly.
        benefit: String,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "failed to start the async runtime");
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(run(cli))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> ExitCode {
    let timeout = Duration::from_secs(cli.timeout_secs);
    let client = match ApiClient::new(cli.base_url.clone(), timeout) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "failed to build the HTTP client");
            return ExitCode::FAILURE;
        }
    };
    let mode = cli.mode;

    match cli.command {
        Command::Count => {
            let view = drive(client.count()).await;
            finish(&render::render_count(&view, mode), view.is_error())
        }
        Command::TopPaid { limit } => {
            let view = drive(client.top_paid(limit)).await;
            finish(&render::render_top_paid(&view, mode), view.is_error())
        }
        Command::HeadcountRange { min, max } => {
            let view = drive(client.headcount_range(min, max)).await;
            finish(
                &render::render_headcount_range(&view, min, max, mode),
                view.is_error(),
            )
        }
        Command::ByLocation { location } => {
            let view = drive(client.by_location(&location)).await;
            finish(
                &render::render_term_view(TermKind::Location, &location, &view, mode),
                view.is_error(),
            )
        }
        Command::BySkill { skill } => {
            let view = drive(client.by_skill(&skill)).await;
            finish(
                &render::render_term_view(TermKind::Skill, &skill, &view, mode),
                view.is_error(),
            )
        }
        Command::ByBenefit { benefit } => {
            let view = drive(client.by_benefit(&benefit)).await;
            finish(
                &render::render_term_view(TermKind::Benefit, &benefit, &view, mode),
                view.is_error(),
            )
        }
    }
}

/// Walks one view through its lifecycle for a single request.
async fn drive<T>(request: impl Future<Output = Result<T, ApiClientError>>) -> ViewState<T> {
    let mut view = ViewState::new();
    view.begin();
    view.resolve(request.await);
    view
}

fn finish(output: &str, failed: bool) -> ExitCode {
    print!("{output}");
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
