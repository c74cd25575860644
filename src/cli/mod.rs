//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod generate;
mod list;
mod show;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::build::BuildContext;
use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::output::MAX_SCALE;
use crate::spritesheet::Direction;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// spritegen - Procedural pixel-art character sheets, isometric tiles and transition masks
#[derive(Parser)]
#[command(name = "spritegen")]
#[command(about = "Procedural pixel-art character sheets, isometric tiles and transition masks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand that reads `spritegen.toml`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Configuration file (default: discover spritegen.toml upwards from the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show info-level diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate sprite sheets (all targets when none are given)
    Generate {
        /// Target names (wizard), kinds (character, tiles, masks) or ids (character:wizard)
        #[arg(value_name = "TARGET")]
        targets: Vec<String>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Scale output by integer factor
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: Option<u32>,

        /// Number of parallel jobs
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Write a JSON metadata sidecar next to each PNG
        #[arg(long)]
        metadata: bool,

        /// Suppress progress output
        #[arg(short, long, conflicts_with = "json")]
        quiet: bool,

        /// Report progress as JSON lines on stdout
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List every target with its output path
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Render a single character frame to PNG
    Show {
        /// Character name
        character: String,

        /// Facing direction: down, up, left or right
        #[arg(short, long, default_value = "down")]
        direction: Direction,

        /// Walk frame (wraps modulo 4)
        #[arg(short, long, default_value_t = 0)]
        frame: usize,

        /// Output file (default: <character>_<direction>_<frame>.png)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Scale output by integer factor (default: the configured scale)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_SCALE as i64))]
        scale: Option<u8>,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Entry point
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { targets, out, scale, jobs, metadata, quiet, json, config } => {
            init_logging(config.verbose, quiet);
            let overrides = CliOverrides { out, scale, metadata: metadata.then_some(true), jobs };
            generate::run_generate(&config, &overrides, targets, quiet, json)
        }
        Commands::List { json, config } => {
            init_logging(config.verbose, false);
            list::run_list(&config, json)
        }
        Commands::Show { character, direction, frame, output, scale, config } => {
            init_logging(config.verbose, false);
            show::run_show(&config, &character, direction, frame, output.as_deref(), scale)
        }
    }
}

/// Install the `env_logger` backend. `RUST_LOG` wins over the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

/// Load configuration, apply CLI overrides and build a context.
///
/// A relative `--out` is taken relative to the working directory, not the
/// project root. Failures are reported and mapped to an exit code.
pub(crate) fn load_context(args: &ConfigArgs, overrides: &CliOverrides) -> Result<BuildContext, ExitCode> {
    let mut loaded = load_config(args.config.as_deref()).map_err(|e| report_error(&e, EXIT_INVALID_ARGS))?;

    let mut overrides = overrides.clone();
    if let Some(out) = overrides.out.take() {
        overrides.out = Some(absolute_from_cwd(&out));
    }
    merge_cli_overrides(&mut loaded.config, &overrides).map_err(|e| report_error(&e, EXIT_INVALID_ARGS))?;

    Ok(BuildContext::from_loaded(loaded).with_verbose(args.verbose))
}

fn absolute_from_cwd(path: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Print `Error: …` on stderr and return the exit code.
pub(crate) fn report_error(error: &dyn std::fmt::Display, code: u8) -> ExitCode {
    eprintln!("Error: {}", error);
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "spritegen", "generate", "wizard", "tiles", "-o", "dist", "--scale", "2", "-j", "3", "--metadata",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { targets, out, scale, jobs, metadata, quiet, json, .. } => {
                assert_eq!(targets, ["wizard", "tiles"]);
                assert_eq!(out, Some(PathBuf::from("dist")));
                assert_eq!(scale, Some(2));
                assert_eq!(jobs, Some(3));
                assert!(metadata);
                assert!(!quiet && !json);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["spritegen", "generate", "--scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["spritegen", "generate", "--scale", "17"]).is_err());
        assert!(Cli::try_parse_from(["spritegen", "show", "wizard", "--scale", "17"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_json() {
        assert!(Cli::try_parse_from(["spritegen", "generate", "--quiet", "--json"]).is_err());
    }

    #[test]
    fn test_parse_show_direction() {
        let cli = Cli::try_parse_from(["spritegen", "show", "wizard", "--direction", "left", "--frame", "5"]).unwrap();
        match cli.command {
            Commands::Show { character, direction, frame, output, scale, .. } => {
                assert_eq!(character, "wizard");
                assert_eq!(direction, Direction::Left);
                assert_eq!(frame, 5);
                assert!(output.is_none());
                assert!(scale.is_none());
            }
            _ => panic!("expected show"),
        }
        assert!(Cli::try_parse_from(["spritegen", "show", "wizard", "-d", "sideways"]).is_err());
    }

    #[test]
    fn test_absolute_from_cwd() {
        assert_eq!(absolute_from_cwd(Path::new("/abs/out")), PathBuf::from("/abs/out"));
        assert!(absolute_from_cwd(Path::new("rel")).is_absolute());
    }
}
