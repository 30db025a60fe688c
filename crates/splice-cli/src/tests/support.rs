//! Test support utilities for CLI unit and behavioural coverage.
//!
//! Provides a static configuration loader and a world that owns a temporary
//! target file, captured output and the last exit code.

use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use splice_config::Config;
use tempfile::TempDir;

use crate::{AppError, ConfigLoader, IoStreams, run_with_loader};

pub(super) const ORDER_HISTORY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../splice-core/tests/fixtures/order_history.tsx"
));

pub(super) const ORDER_HISTORY_PATCHED: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../splice-core/tests/fixtures/order_history.patched.tsx"
));

pub(super) struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    pub(super) fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

pub(super) struct TestWorld {
    _dir: TempDir,
    pub target: Utf8PathBuf,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: Option<ExitCode>,
}

impl TestWorld {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create temp dir")?;
        let target = Utf8PathBuf::from_path_buf(dir.path().join("OrderDetails.tsx"))
            .map_err(|path| anyhow::anyhow!("non UTF-8 temp path: {}", path.display()))?;
        Ok(Self {
            _dir: dir,
            target,
            stdout: Vec::new(),
            stderr: Vec::new(),
            exit_code: None,
        })
    }

    pub fn write_target(&self, contents: &str) -> Result<()> {
        fs::write(&self.target, contents).context("write target")
    }

    pub fn read_target(&self) -> Result<String> {
        fs::read_to_string(&self.target).context("read target")
    }

    /// Runs the CLI with the world's target configured and `extra` appended.
    pub fn run(&mut self, extra: &[&str]) {
        self.stdout.clear();
        self.stderr.clear();
        let config = Config::default().with_target_path(self.target.clone());
        let loader = StaticConfigLoader::new(config);
        let args = std::iter::once(OsString::from("splice"))
            .chain(extra.iter().map(OsString::from))
            .collect::<Vec<_>>();
        let mut io = IoStreams::new(&mut self.stdout, &mut self.stderr);
        self.exit_code = Some(run_with_loader(args, &mut io, &loader));
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code.unwrap_or_else(|| panic!("CLI has not run"))
    }
}
