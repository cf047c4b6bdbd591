// ===== moodzone/src/main.rs =====
use clap::Parser;
use moodzone::api;
use moodzone::consts::DEFAULT_MAX_ATTEMPTS;
use std::path::PathBuf;
use std::process;
use tracing::error;

mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Timezone happiness scoring for geotagged posts", long_about = None)]
struct Cli {
    /// File containing the post data, one record per line
    tweets: PathBuf,

    /// File containing `word,value` sentiment keywords
    keywords: PathBuf,

    /// Total pipeline attempts before a content error becomes fatal
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Emit results as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Logs go to stderr so --json output stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let results = match api::run_with_retry(&cli.tweets, &cli.keywords, cli.attempts) {
        Ok(results) => results,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&results) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                error!("❌ Failed to serialize results: {}", e);
                process::exit(1);
            }
        }
    } else {
        reports::print_results(&results);
    }

    // An empty result means an input file was missing.
    if results.is_empty() {
        process::exit(1);
    }
}
