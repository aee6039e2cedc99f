//! indc-drv - Driver for the indc front end
//!
//! Parses the command line, resolves the configuration, installs logging
//! and lexes each source file in order, printing its token trace to stdout
//! and any diagnostic to stderr.

pub mod config;
pub mod error;
pub mod session;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::builder::FalseyValueParser;
use clap::Parser;
use indc_lex::TraceFormat;
use indc_util::ColorConfig;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use config::{ColorChoice, Config, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};
pub use session::Session;

/// The single line printed by `-h`.
pub const USAGE: &str = "usage: indc [-h] [-V] [-v] [--no-color] [--color WHEN] [--format FORMAT] [--keep-going] [-c FILE] [FILE...]";

/// indc - lex indentation-structured source files
#[derive(Parser, Debug, Default)]
#[command(name = "indc")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Print the usage line and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Print the version and exit
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// Enable verbose output
    #[arg(short, long, env = "INDC_VERBOSE", value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// Disable color output
    #[arg(long, env = "INDC_NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// When to color diagnostics
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Token trace format (text or json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<TraceFormat>,

    /// Continue with the next file after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Path to configuration file
    #[arg(short, long, env = "INDC_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Source files to lex
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of a file configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(color) = self.color {
            config.color = color;
        }
        if self.no_color {
            config.color = ColorChoice::Never;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.keep_going |= self.keep_going;
        config.verbose |= self.verbose;
        config
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` when
/// verbose. Log lines carry ANSI colors only when `ansi` is set.
pub fn init_logging(verbose: bool, ansi: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}

/// Returns true if output written to stderr should be colored.
pub fn stderr_color(choice: ColorChoice, is_tty: bool) -> bool {
    ColorConfig::from(choice).use_color(is_tty)
}

/// Resolve the effective configuration for a command line.
///
/// Without `-c`, an `indc.toml` in the working directory is used when
/// present.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let base = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration from '{}'", path.display()))?,
        None => {
            let dir = std::env::current_dir().context("failed to read the working directory")?;
            Config::discover(&dir)
                .with_context(|| format!("failed to load configuration from '{}'", dir.join(CONFIG_FILE_NAME).display()))?
                .unwrap_or_default()
        },
    };
    Ok(cli.apply(base))
}

/// Run the driver for a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.help {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }
    if cli.version {
        println!("indc {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let config = resolve_config(&cli)?;
    init_logging(config.verbose, stderr_color(config.color, io::stderr().is_terminal()))?;
    debug!(?config, files = cli.files.len(), "starting");

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let ok = session.run(&cli.files, &mut stdout.lock(), &mut stderr.lock())?;

    debug!(failures = session.failure_count(), "finished");
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
