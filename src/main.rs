use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use release_resolver::config::{ResolverConfig, load_config_or_default};
use release_resolver::extract::Strategy;
use release_resolver::logging::{LogOptions, init_logging};
use release_resolver::page::HttpPageSource;
use release_resolver::resolver::ReleaseResolver;

#[derive(Parser)]
#[command(name = "release-resolver")]
#[command(
    version,
    about = "Print the download URL of the latest Linux release on a vendor release page"
)]
struct Cli {
    /// Release page to scan
    #[arg(long)]
    url: Option<String>,

    /// Which page elements advertise the releases
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Filename suffix the download link must end with
    #[arg(long)]
    suffix: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// JSON config file (default: $XDG_CONFIG_HOME/release-resolver/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,

    /// Append log lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn log_options(&self) -> LogOptions {
        LogOptions {
            verbose: self.verbose,
            json: self.log_json,
            file: self.log_file.clone(),
        }
    }

    /// Command line flags take precedence over the config file
    fn apply(&self, config: &mut ResolverConfig) {
        if let Some(url) = &self.url {
            config.page_url = url.clone();
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(suffix) = &self.suffix {
            config.filename_suffix = suffix.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_ms = secs.saturating_mul(1000);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let mut config = load_config_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let resolution = runtime.block_on(async move {
        let source = Arc::new(HttpPageSource::from_config(&config)?);
        let resolver = ReleaseResolver::new(source, config)?;
        resolver.resolve().await
    })?;

    Ok(resolution.url)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.log_options()) {
        eprintln!("ERROR: {:#}", err);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(url) => {
            // Captured verbatim by the calling build step
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = write!(stdout, "{}", url).and_then(|_| stdout.flush()) {
                error!("Failed to write URL to stdout: {}", err);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            if cli.log_file.is_some() {
                eprintln!("ERROR: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
