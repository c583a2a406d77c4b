//! Logging init: stderr by default, or appended to a file.
//!
//! Stdout carries only the resolved URL, so every diagnostic line goes
//! through tracing to one of these writers.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub json: bool,
    pub file: Option<PathBuf>,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "info,release_resolver=debug"
    } else {
        "info"
    }
}

fn file_writer(path: &Path) -> Result<BoxMakeWriter> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Ok(BoxMakeWriter::new(appender))
}

/// Initialize the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging(options: &LogOptions) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(options.verbose)));

    let (writer, ansi) = match &options.file {
        Some(path) => (file_writer(path)?, false),
        None => (
            BoxMakeWriter::new(std::io::stderr),
            std::io::stderr().is_terminal(),
        ),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_target(false);

    let installed = if options.json {
        builder.json().try_init()
    } else {
        builder.with_ansi(ansi).try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    if let Some(path) = &options.file {
        tracing::debug!("release-resolver logging to {}", path.display());
    }

    Ok(())
}
