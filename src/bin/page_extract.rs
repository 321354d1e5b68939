//! Command-line driver: fetches one page and prints its summary.
//!
//! Text output goes to stdout; logs and fetch errors go to stderr.
//! Set `RUST_LOG=rs_page_extract=debug` to see request details.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use rs_page_extract::report::{render_json, render_text};
use rs_page_extract::{extract_with_options, Options};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "page_extract", version, about = "Extract title, headings, paragraphs, links and images from a web page")]
struct Cli {
    /// Page to fetch.
    #[arg(default_value = "https://example.com")]
    url: String,

    /// Print the full result as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds.
    #[arg(long, env = "PAGE_EXTRACT_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// User-Agent header to send.
    #[arg(long, env = "PAGE_EXTRACT_USER_AGENT")]
    user_agent: Option<String>,

    /// Maximum number of paragraphs to keep.
    #[arg(long)]
    max_paragraphs: Option<usize>,

    /// Maximum number of links to keep.
    #[arg(long)]
    max_links: Option<usize>,

    /// Maximum number of images to keep.
    #[arg(long)]
    max_images: Option<usize>,
}

impl Cli {
    fn options(&self) -> Options {
        let mut options = Options::from_env();
        if let Some(secs) = self.timeout {
            options.timeout = Duration::from_secs(secs);
        }
        if let Some(ua) = &self.user_agent {
            options.user_agent.clone_from(ua);
        }
        if let Some(n) = self.max_paragraphs {
            options.max_paragraphs = n;
        }
        if let Some(n) = self.max_links {
            options.max_links = n;
        }
        if let Some(n) = self.max_images {
            options.max_images = n;
        }
        options
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = extract_with_options(&cli.url, &cli.options()).await;

    if cli.json {
        match render_json(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize result: {e}");
                return ExitCode::FAILURE;
            }
        }
        return if result.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match result.summary() {
        Some(page) => {
            println!("Extraction complete for: {}\n", page.final_url());
            print!("{}", render_text(&result));
            ExitCode::SUCCESS
        }
        None => {
            eprint!("{}", render_text(&result));
            ExitCode::FAILURE
        }
    }
}
