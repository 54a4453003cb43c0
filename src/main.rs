// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use jsubnorm::app_config::{self, Config};
use jsubnorm::app_controller::{Controller, FileOutcome, RunOptions};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize subtitle files (default command)
    #[command(alias = "norm")]
    Normalize(NormalizeArgs),

    /// Generate shell completions for jsubnorm
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags shared by the default command and `normalize`
#[derive(Args, Debug, Clone)]
struct NormalizeFlags {
    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Style given to every dialogue line (overrides the config)
    #[arg(short, long)]
    style: Option<String>,

    /// Directory for output files (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Normalize and report without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    /// Subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    #[command(flatten)]
    flags: NormalizeFlags,
}

/// jsubnorm - Japanese subtitle normalizer
///
/// Cleans ASS/SRT subtitles from TV and web releases: strips tags and sound
/// annotations, splits two-speaker lines, drops ruby lines, merges repeats and
/// normalizes character widths.
#[derive(Parser, Debug)]
#[command(name = "jsubnorm")]
#[command(version)]
#[command(about = "Japanese subtitle normalizer")]
#[command(long_about = "jsubnorm rewrites Japanese ASS/SRT subtitles into a clean, consistent form.

EXAMPLES:
    jsubnorm episode01.ass                      # Normalize using default config
    jsubnorm -f episode01.ass                   # Force overwrite existing output
    jsubnorm -s Main episode01.ass              # Put every line in the 'Main' style
    jsubnorm -n --log-level debug /subs/        # Dry run over a directory with debug logging
    jsubnorm -o out/ /subs/                     # Write outputs under out/
    jsubnorm completions bash > jsubnorm.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

OUTPUT:
    Each input is written to <stem>.<suffix>.<ext> (suffix 'normalized' by default).
    Existing outputs are skipped unless -f is given.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    #[command(flatten)]
    flags: NormalizeFlags,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Install the logger at the most verbose level; the effective level is
    // narrowed with `log::set_max_level` once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "jsubnorm", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Normalize(args)) => run_normalize(args),
        None => {
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            run_normalize(NormalizeArgs {
                input_path,
                flags: cli.flags,
            })
        }
    }
}

fn run_normalize(args: NormalizeArgs) -> Result<()> {
    let flags = &args.flags;

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &flags.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = load_or_create_config(flags)?;

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if flags.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)?;
    let options = RunOptions {
        output_dir: flags.output_dir.clone(),
        force_overwrite: flags.force_overwrite,
        dry_run: flags.dry_run,
    };

    if args.input_path.is_file() {
        match controller.run(&args.input_path, &options)? {
            FileOutcome::Written(path, report) => {
                info!("{} events written to {}", report.output_events, path.display());
            }
            FileOutcome::DryRun(report) => {
                info!(
                    "Would write {} events ({} split, {} filtered, {} merged)",
                    report.output_events,
                    report.split_lines,
                    report.filtered_lines,
                    report.text_merges + report.timing_merges
                );
            }
            FileOutcome::Skipped(_) | FileOutcome::Empty => {}
        }
        Ok(())
    } else if args.input_path.is_dir() {
        let summary = controller.run_folder(&args.input_path, &options)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} file(s) failed to normalize", summary.failed));
        }
        Ok(())
    } else {
        Err(anyhow!("Input path does not exist: {:?}", args.input_path))
    }
}

// Load the config file, or write a default one when it does not exist yet.
// CLI flags are applied on top either way.
fn load_or_create_config(flags: &NormalizeFlags) -> Result<Config> {
    let config_path = Path::new(&flags.config_path);

    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path.display());
        let config = Config::default();
        config
            .save(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path.display()))?;
        config
    };

    if let Some(style) = &flags.style {
        config.normalization.target_style = style.clone();
    }

    if let Some(log_level) = &flags.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}
