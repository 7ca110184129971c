use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use news_verifier::client::{PredictionService, VerifierClient};
use news_verifier::config::CONFIG;
use news_verifier::history::SearchHistory;
use news_verifier::render;
use news_verifier::session::{ANALYZE_ERROR_MESSAGE, Session};
use news_verifier::storage::FileStore;

#[derive(Parser, Debug)]
#[command(name = "news-verifier", version, about = "Check article text against a fake news classifier")]
struct Cli {
    /// Base URI of the prediction service
    #[arg(long, global = true)]
    api_uri: Option<String>,

    /// File holding the search history
    #[arg(long, global = true)]
    history_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify article text (reads stdin when TEXT is omitted)
    Check { text: Option<String> },
    /// Show recent searches
    History,
    /// Forget recent searches
    ClearHistory,
    /// Show the model accuracy
    Accuracy,
    /// Show the service banner
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let api_uri = cli.api_uri.unwrap_or_else(|| CONFIG.api_uri.clone());
    let history_file = cli
        .history_file
        .unwrap_or_else(|| CONFIG.history_file.clone());
    tracing::debug!(api_uri = %api_uri, history = %history_file.display(), "resolved configuration");

    match cli.command {
        Command::Check { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    let len = buf.trim_end_matches(['\n', '\r']).len();
                    buf.truncate(len);
                    buf
                }
            };
            check(&api_uri, history_file, text).await
        }
        Command::History => {
            let history = SearchHistory::load(FileStore::open(&history_file)?)?;
            println!("{}", render::history_listing(history.records()));
            Ok(ExitCode::SUCCESS)
        }
        Command::ClearHistory => {
            let mut history = SearchHistory::load(FileStore::open(&history_file)?)?;
            history.clear()?;
            println!("Search history cleared.");
            Ok(ExitCode::SUCCESS)
        }
        Command::Accuracy => {
            let client = VerifierClient::new(&api_uri)?;
            match client.fetch_accuracy().await {
                Ok(accuracy) => {
                    println!("{}", render::accuracy_line(accuracy));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("Could not fetch model accuracy: {e}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Status => {
            let client = VerifierClient::new(&api_uri)?;
            println!("{}", client.health().await?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn check(api_uri: &str, history_file: PathBuf, text: String) -> anyhow::Result<ExitCode> {
    let client = VerifierClient::new(api_uri)?;
    let store = FileStore::open(&history_file)?;
    let mut session = Session::open(client, store).await?;
    session.set_content(text);

    if !session.can_analyze() {
        eprintln!("Nothing to analyze: paste some article text first.");
        return Ok(ExitCode::FAILURE);
    }

    let code = match session.analyze().await {
        Ok(verdict) => {
            println!("{}", render::verdict_block(verdict));
            ExitCode::SUCCESS
        }
        Err(_) => {
            let message = session.error().unwrap_or(ANALYZE_ERROR_MESSAGE);
            println!("{}", render::error_block(message));
            ExitCode::FAILURE
        }
    };

    if let Some(accuracy) = session.accuracy() {
        println!("\nModel Accuracy\n{}", render::accuracy_line(accuracy));
    }
    Ok(code)
}
