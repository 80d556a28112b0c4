//! CLI definition, tracing setup, and the build command.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};
use vitae_core::categories::CategorySpec;
use vitae_core::pipeline::{BuildResult, ProgressReporter, build_site};
use vitae_shared::{AppConfig, BuildConfig, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// vitae: render CV data files into a static HTML page.
///
/// Reads `./data/` unless a config file says otherwise and always writes
/// `./index.html`. No arguments are needed.
#[derive(Parser)]
#[command(
    name = "vitae",
    version,
    about = "Render CV data files into a static HTML page.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of ./vitae.toml. A relative data_dir
    /// inside it resolves against its directory.
    #[arg(long, env = "VITAE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "vitae=info",
        1 => "vitae=debug",
        _ => "vitae=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Build command
// ---------------------------------------------------------------------------

/// Resolve the build paths from `--config`, `./vitae.toml`, or defaults.
fn resolve_build_config(config_path: Option<&Path>) -> Result<BuildConfig> {
    match config_path {
        Some(path) => {
            let config: AppConfig = load_config_from(path)?;
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            Ok(BuildConfig::resolve(&config, base))
        }
        None => Ok(BuildConfig::from(&load_config()?)),
    }
}

/// Run the build and print the completion message.
pub(crate) fn run(cli: &Cli) -> Result<()> {
    let build_config = resolve_build_config(cli.config.as_deref())?;
    build_and_report(&build_config, &mut std::io::stdout().lock())
}

/// Build the page and write `Done.` to `out`, the only thing it writes.
fn build_and_report(build_config: &BuildConfig, out: &mut impl Write) -> Result<()> {
    info!(
        data_dir = %build_config.data_dir.display(),
        output = %build_config.output_path.display(),
        "building page"
    );

    let result = build_site(build_config, &CliProgress)
        .wrap_err_with(|| format!("build from {} failed", build_config.data_dir.display()))?;

    debug!(elapsed_ms = result.elapsed.as_millis() as u64, "finished");
    writeln!(out, "Done.").wrap_err("failed to write to stdout")?;
    Ok(())
}

/// Progress reporter for the terminal. Everything goes to the log on
/// stderr; stdout only carries `Done.`.
struct CliProgress;

impl ProgressReporter for CliProgress {
    fn category_loaded(&self, spec: &CategorySpec, count: usize) {
        debug!(category = spec.name, count, "loaded");
    }

    fn done(&self, result: &BuildResult) {
        info!(
            events = result.event_count,
            projects = result.project_count,
            teaching = result.teaching_count,
            publications = result.publication_count,
            page = %result.output_path.display(),
            "page written"
        );
    }
}
