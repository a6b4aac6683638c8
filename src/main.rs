//! filepeek - preview a fixed set of remote text files.
//!
//! Usage:
//!   filepeek                  Launch interactive TUI
//!   filepeek list             List the files available for preview
//!   filepeek show <ID>        Fetch one file and print it
//!   filepeek --help           Show help

mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};

use filepeek_core::Catalog;
use filepeek_fetch::{FetchError, Fetcher, HttpFetcher};
use filepeek_tui::{ThemeVariant, TuiConfig, UserSettings};

use crate::logging::LogTarget;

#[derive(Parser)]
#[command(
    name = "filepeek",
    version,
    about = "Preview a fixed set of remote text files",
    long_about = "filepeek lets you pick one of a few known text files and view it.\n\n\
                  Launch the interactive TUI by running `filepeek`, or use \
                  subcommands for quick operations."
)]
struct Cli {
    /// Origin serving the files (overrides settings)
    #[arg(short = 'u', long, global = true)]
    base_url: Option<String>,

    /// Color theme for the TUI
    #[arg(short, long)]
    theme: Option<ThemeVariant>,

    /// Maximum rows of the content viewport
    #[arg(long)]
    content_height: Option<u16>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Log file for the TUI (defaults to the local data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the files available for preview
    List {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Fetch one file and print its content
    Show {
        /// File id (see `filepeek list`)
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let mut config = TuiConfig::new();
    config.base_url = cli.base_url.clone();
    config.theme = cli.theme;
    config.content_height = cli.content_height;

    match cli.command {
        Some(Command::List { format }) => {
            logging::init(cli.debug, &LogTarget::Stderr)?;
            run_list(format)?;
        }
        Some(Command::Show { ref id }) => {
            logging::init(cli.debug, &LogTarget::Stderr)?;
            run_show(id, &config)?;
        }
        None => {
            // Launch TUI
            let log_file = cli.log_file.unwrap_or_else(logging::default_log_file);
            logging::init(cli.debug, &LogTarget::File(log_file))?;
            filepeek_tui::run_with_config(config)?;
        }
    }

    Ok(())
}

/// Print the catalog.
fn run_list(format: OutputFormat) -> Result<()> {
    let catalog = Catalog::default();

    match format {
        OutputFormat::Text => {
            let id_width = catalog.iter().map(|f| f.id.len()).max().unwrap_or(0);
            let name_width = catalog.iter().map(|f| f.name.len()).max().unwrap_or(0);
            for file in catalog.iter() {
                println!(
                    "{:<id_width$}  {:<name_width$}  {}",
                    file.id, file.name, file.path
                );
            }
        }
        OutputFormat::Json => {
            let files: Vec<_> = catalog.iter().collect();
            println!("{}", serde_json::to_string_pretty(&files)?);
        }
    }

    Ok(())
}

/// Fetch one file and write it to stdout.
fn run_show(id: &str, config: &TuiConfig) -> Result<()> {
    let catalog = Catalog::default();
    let file = catalog.lookup(id).map_err(|e| {
        let known: Vec<_> = catalog.iter().map(|f| f.id).collect();
        eyre!("{e} (expected one of: {})", known.join(", "))
    })?;

    let settings = UserSettings::config_path()
        .as_deref()
        .map(UserSettings::load_from)
        .unwrap_or_default();
    let preview_config = config.preview_config(&settings)?;
    let fetcher = HttpFetcher::new(&preview_config).context("Failed to create fetcher")?;

    tracing::debug!(id = file.id, base_url = %preview_config.base_url, "fetching");
    let rt = tokio::runtime::Runtime::new()?;
    let text = rt
        .block_on(fetcher.fetch_text(file.path))
        .map_err(|e| describe_failure(e, &fetcher, file.name))?;

    print!("{text}");
    Ok(())
}

/// Attach what was being loaded, and from where when the server was unreachable.
fn describe_failure(err: FetchError, fetcher: &HttpFetcher, name: &str) -> color_eyre::Report {
    if err.is_transport() {
        eyre!(err).wrap_err(format!("Could not reach {} to load {name}", fetcher.base_url()))
    } else {
        eyre!(err).wrap_err(format!("Failed to load {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use filepeek_core::PreviewConfig;

    #[tokio::test]
    async fn test_unreachable_server_names_base_url() {
        // Bind then drop to get a port nothing listens on.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let fetcher = HttpFetcher::new(&PreviewConfig::new(format!("http://{addr}/"))).unwrap();
        let err = fetcher.fetch_text("/files/Web-1.txt").await.unwrap_err();

        let report = describe_failure(err, &fetcher, "Test.2readme.txt");
        assert_eq!(
            report.to_string(),
            format!("Could not reach http://{addr} to load Test.2readme.txt")
        );
    }

    #[test]
    fn test_status_failure_names_file() {
        let fetcher = HttpFetcher::new(&PreviewConfig::default()).unwrap();
        let err = FetchError::Status {
            url: "http://127.0.0.1:3000/files/Web-3.txt".to_string(),
            status: 404,
        };

        let report = describe_failure(err, &fetcher, "SQL-Schema.txt");
        assert_eq!(report.to_string(), "Failed to load SQL-Schema.txt");
        assert!(format!("{report:?}").contains("returned HTTP 404"));
    }
}
