use bindlog_collector_domain::CliOverrides;
use bindlog_collector_infrastructure::source::FileLineSource;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod di;
mod report;

#[derive(Parser)]
#[command(name = "bindlog-collector")]
#[command(version)]
#[command(about = "Parse a BIND server query log and send the DNS queries to a collector API")]
struct Cli {
    /// Path to the BIND server log file
    queries: PathBuf,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Collector API base URL
    #[arg(long)]
    host: Option<String>,

    /// Collector identifier
    #[arg(long)]
    collector_id: Option<String>,

    /// Collector client key
    #[arg(long)]
    client_key: Option<String>,

    /// Queries per POST request
    #[arg(long)]
    chunk_size: Option<usize>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // A missing or unreadable log is reported before any configuration problem.
    let mut source = FileLineSource::open(&cli.queries).await?;

    // Load configuration
    let cli_overrides = CliOverrides {
        host: cli.host.clone(),
        collector_id: cli.collector_id.clone(),
        client_key: cli.client_key.clone(),
        timeout_secs: cli.timeout,
        chunk_size: cli.chunk_size,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting Bindlog Collector v{}", env!("CARGO_PKG_VERSION"));
    info!(path = %cli.queries.display(), "Reading query log");

    // Dependency Injection
    let use_cases = di::UseCases::new(&config)?;

    let result = use_cases.forward_queries.execute(&mut source).await?;
    let rankings = use_cases.rank_queries.execute(&result.records);

    report::print_summary(&result);
    report::print_rankings(&rankings);

    info!("Collector run complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindlog_collector_domain::DomainError;

    #[tokio::test]
    async fn test_missing_log_is_reported_before_config() {
        // Empty endpoint settings would fail validation if config came first.
        let cli = Cli::parse_from([
            "bindlog-collector",
            "/nonexistent/bindlog-collector/queries.log",
            "--host",
            "",
            "--collector-id",
            "",
            "--client-key",
            "",
        ]);

        let err = run(cli).await.unwrap_err();

        assert!(
            matches!(err.downcast_ref::<DomainError>(), Some(DomainError::SourceUnavailable(_))),
            "unexpected error: {:#}",
            err
        );
        assert!(err.to_string().contains("queries.log"));
    }
}
