//! Command-line runtime for `splice`.
//!
//! The runner splits configuration flags from the remaining arguments, loads
//! layered configuration, installs telemetry, patches the target file with
//! the built-in recipe and renders a step report. Configuration loading and
//! the output streams are injectable so tests can drive the whole flow.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use camino::Utf8Path;
use clap::Parser;
use splice_config::Config;
use splice_core::recipes::whatsapp_toggle;
use splice_core::{Pipeline, StepReport};
use tracing::{debug, info};

mod cli;
mod config;
mod errors;
mod report;
mod target;
pub mod telemetry;

pub use cli::OutputFormat;

use cli::Cli;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use config::{prepare_cli_arguments, split_config_arguments};
pub(crate) use errors::AppError;
use report::PatchReport;
use target::{read_target, write_target};

/// CLI flags recognised by the configuration loader.
///
/// MAINTENANCE: keep in sync with the fields of `splice_config::Config`.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--target-path",
    "--log-filter",
    "--log-format",
];

/// Bundles the output streams handed to the runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

struct CliRunner<'a, 'io, W: Write, E: Write, L: ConfigLoader> {
    io: &'a mut IoStreams<'io, W, E>,
    loader: &'a L,
}

impl<'a, 'io, W, E, L> CliRunner<'a, 'io, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    fn new(io: &'a mut IoStreams<'io, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let cli_arguments = prepare_cli_arguments(&args, &split);

        let result = Cli::try_parse_from(cli_arguments)
            .map_err(AppError::CliUsage)
            .and_then(|cli| {
                self.loader
                    .load(&split.config_arguments)
                    .map(|config| (cli, config))
            })
            .and_then(|(cli, config)| self.execute(&cli, config));

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(AppError::CliUsage(error)) if !error.use_stderr() => {
                let _ = write!(self.io.stdout, "{error}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                let _ = writeln!(self.io.stderr, "{error}");
                ExitCode::FAILURE
            }
        }
    }

    fn execute(&mut self, cli: &Cli, loaded: Config) -> Result<(), AppError> {
        let config = match &cli.path {
            Some(path) => loaded.with_target_path(path.clone()),
            None => loaded,
        };
        telemetry::initialise(&config)?;

        let recipe = whatsapp_toggle().map_err(|source| AppError::Pipeline {
            path: config.target_path().to_owned(),
            source,
        })?;
        let misses = patch_file(&recipe, config.target_path(), cli.format, &mut *self.io.stdout)?;

        if cli.strict && !misses.is_empty() {
            return Err(AppError::StrictModeViolation {
                steps: misses.join(", "),
            });
        }
        Ok(())
    }
}

/// Applies `recipe` to the file at `path`, writing it back only when the
/// buffer changed, and renders the report. Returns the names of steps that
/// missed their anchor or pattern.
fn patch_file(
    recipe: &Pipeline,
    path: &Utf8Path,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<Vec<String>, AppError> {
    info!(path = %path, recipe = recipe.name(), "patching target");
    let source = read_target(path)?;
    let result = recipe
        .apply_all(&source)
        .map_err(|error| AppError::Pipeline {
            path: path.to_owned(),
            source: error,
        })?;

    if result.changed() {
        write_target(path, result.output())?;
        info!(path = %path, "target rewritten");
    } else {
        debug!(path = %path, "target left untouched");
    }

    PatchReport::new(path, recipe.name(), &source, &result).render(format, out)?;

    Ok(result.misses().map(StepReport::step).map(str::to_owned).collect())
}

/// Runs the CLI using the provided arguments and output streams.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}
