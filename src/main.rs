//! CLI entry point for the shoplens dashboard.
//!
//! Provides subcommands for each view of the scraped dataset, a CSV export of
//! the review analysis, and an interactive dashboard loop.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use shoplens::analysis::aggregate::{aggregate, score_reviews};
use shoplens::analysis::filter::{MONTHS, filter_by_month, month_ordinal};
use shoplens::dataset::Dataset;
use shoplens::loader::load_dataset;
use shoplens::output::{append_records, breakdown_json};
use shoplens::render::{
    products::render_products, reviews::render_reviews, testimonials::render_testimonials,
};
use std::ffi::OsStr;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Month the review view opens on.
const DEFAULT_MONTH: &str = "May";

#[derive(Parser)]
#[command(name = "shoplens")]
#[command(about = "A dashboard for scraped e-commerce data", long_about = None)]
struct Cli {
    /// Path to the scraped dataset JSON file
    #[arg(long, global = true, default_value = "scraped_data.json")]
    data: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product catalog
    Products,
    /// Show customer testimonials
    Testimonials,
    /// Run the sentiment analysis for one month of reviews
    Reviews {
        /// Month to analyze
        #[arg(short, long, default_value = DEFAULT_MONTH)]
        month: String,

        /// Show the per-review detail table
        #[arg(long, default_value_t = false)]
        details: bool,

        /// Print the aggregate as JSON instead of the rendered view
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Export analyzed review rows for one month to CSV
    Export {
        /// Month to analyze
        #[arg(short, long, default_value = DEFAULT_MONTH)]
        month: String,

        /// CSV file to append results to
        #[arg(short, long, default_value = "review_analysis.csv")]
        output: String,
    },
    /// Interactive loop over all three views
    Dashboard,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/shoplens.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("shoplens.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    // The dataset is loaded once and stays read-only; every view recomputes
    // from it. An absent file halts the whole session with a message.
    let Some(dataset) = load_dataset(&cli.data)? else {
        error!(path = %cli.data, "Dataset file not found");
        bail!("no data found — check that {} exists", cli.data);
    };

    match cli.command {
        Commands::Products => {
            print!("{}", render_products(&dataset.products));
        }
        Commands::Testimonials => {
            print!("{}", render_testimonials(&dataset.testimonials));
        }
        Commands::Reviews {
            month,
            details,
            json,
        } => {
            if json {
                let ordinal = month_ordinal(&month)?;
                let filtered = filter_by_month(&dataset.reviews, ordinal);
                let scored = score_reviews(&filtered, &mut rand::thread_rng());
                println!("{}", breakdown_json(&aggregate(&scored, &month))?);
            } else {
                print!("{}", render_reviews(&dataset.reviews, &month, details)?);
            }
        }
        Commands::Export { month, output } => {
            let ordinal = month_ordinal(&month)?;
            let filtered = filter_by_month(&dataset.reviews, ordinal);
            let scored = score_reviews(&filtered, &mut rand::thread_rng());

            append_records(&output, &scored)?;
            info!(month, rows = scored.len(), output, "Export complete");
            println!("Wrote {} rows to {}", scored.len(), output);
        }
        Commands::Dashboard => {
            run_dashboard(&dataset)?;
        }
    }

    Ok(())
}

/// Interactive view selector. Each selection triggers a full synchronous
/// recomputation of that view from the already-loaded dataset.
fn run_dashboard(dataset: &Dataset) -> Result<()> {
    let stdin = std::io::stdin();
    let mut month = DEFAULT_MONTH.to_string();

    loop {
        println!();
        println!("Sections: [1] Products  [2] Testimonials  [3] Reviews  [q] Quit");
        print!("Go to: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "1" => print!("{}", render_products(&dataset.products)),
            "2" => print!("{}", render_testimonials(&dataset.testimonials)),
            "3" => {
                if let Some(selected) = prompt_month(&stdin, &month)? {
                    month = selected;
                }
                print!("{}", render_reviews(&dataset.reviews, &month, false)?);
            }
            "q" | "quit" | "exit" => break,
            "" => continue,
            other => println!("Unknown selection: {other}"),
        }
    }

    Ok(())
}

/// Asks for a month, defaulting to the previous selection on empty input.
/// Returns `None` on EOF or an unrecognized name (the caller keeps the
/// previous month either way).
fn prompt_month(stdin: &std::io::Stdin, current: &str) -> Result<Option<String>> {
    print!("Month [{current}]: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match month_ordinal(trimmed) {
        Ok(ordinal) => Ok(Some(MONTHS[ordinal as usize - 1].to_string())),
        Err(_) => {
            println!("Unknown month {trimmed:?}, keeping {current}.");
            Ok(None)
        }
    }
}
