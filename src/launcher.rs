use crate::explorers::display_name;
use crate::settings::ConfigProvider;
use anyhow::{anyhow, bail};
use std::path::Path;
use std::process::Command;

const APP_BUNDLE_SUFFIX: &str = ".app";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// A fully constructed launch invocation. Arguments are kept as an array and
/// spawned without a shell, so paths containing quotes or spaces need no
/// escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    fn direct(explorer: &str, target: &str) -> Self {
        Self {
            program: explorer.to_string(),
            args: vec![target.to_string()],
        }
    }

    fn open_with(explorer: &str, target: &str) -> Self {
        Self {
            program: "open".to_string(),
            args: vec!["-a".to_string(), explorer.to_string(), target.to_string()],
        }
    }

    pub fn is_indirect(&self) -> bool {
        self.program == "open"
    }
}

impl std::fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for a in &self.args {
            write!(f, " {a}")?;
        }
        Ok(())
    }
}

/// Build the launch command for the given explorer and target.
///
/// With `use_open_command` set the indirect `open -a` form is always used.
/// Otherwise macOS `.app` bundles go through `open -a` (they are directories,
/// not executables) and everything else is executed directly with the target
/// as its sole argument.
pub fn build_launch_command(
    explorer: &str,
    target: &str,
    use_open_command: bool,
    platform: Platform,
) -> LaunchCommand {
    if use_open_command {
        return LaunchCommand::open_with(explorer, target);
    }
    if platform == Platform::MacOs && explorer.ends_with(APP_BUNDLE_SUFFIX) {
        return LaunchCommand::open_with(explorer, target);
    }
    LaunchCommand::direct(explorer, target)
}

fn fallback_eligible(explorer: &str, use_open_command: bool, platform: Platform) -> bool {
    platform == Platform::MacOs && explorer.ends_with(APP_BUNDLE_SUFFIX) && !use_open_command
}

/// Executes launch commands. The reveal flow takes this as a parameter so
/// tests can record commands instead of spawning processes.
pub trait CommandRunner {
    fn run(&mut self, cmd: &LaunchCommand) -> anyhow::Result<()>;
}

/// Runs commands as real child processes and waits for them to exit.
#[derive(Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, cmd: &LaunchCommand) -> anyhow::Result<()> {
        let status = Command::new(&cmd.program).args(&cmd.args).status()?;
        if !status.success() {
            bail!("`{cmd}` exited with {status}");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The explorer was launched; `explorer_name` is the display name to show
    /// in the success message.
    Launched { explorer_name: String },
    /// No explorer is configured. The caller should run the configure flow
    /// and retry; this is not an error.
    NotConfigured,
}

/// Reveal `target` in the configured explorer.
///
/// The configuration is re-read on every call; a path persisted by a
/// just-finished configure flow is picked up immediately.
pub fn reveal(
    target: &str,
    cfg: &dyn ConfigProvider,
    runner: &mut dyn CommandRunner,
    platform: Platform,
) -> anyhow::Result<RevealOutcome> {
    if target.trim().is_empty() {
        bail!("no file or folder selected");
    }

    let Some(explorer) = cfg.explorer_path() else {
        return Ok(RevealOutcome::NotConfigured);
    };

    launch_explorer(&explorer, target, cfg.use_open_command(), runner, platform)
}

/// Launch a known explorer path, bypassing the configuration read. Used when
/// the configure flow has just returned the resolved path. Launch failures
/// for macOS `.app` bundles are retried once through `open -a` before giving
/// up.
pub fn launch_explorer(
    explorer: &str,
    target: &str,
    use_open_command: bool,
    runner: &mut dyn CommandRunner,
    platform: Platform,
) -> anyhow::Result<RevealOutcome> {
    if !Path::new(explorer).exists() {
        bail!("explorer application not found at: {explorer}");
    }

    let cmd = build_launch_command(explorer, target, use_open_command, platform);
    tracing::debug!("launching {cmd}");

    match runner.run(&cmd) {
        Ok(()) => Ok(RevealOutcome::Launched {
            explorer_name: display_name(explorer),
        }),
        Err(err) if fallback_eligible(explorer, use_open_command, platform) => {
            tracing::error!("launch failed, retrying via open -a: {err}");
            let fallback = LaunchCommand::open_with(explorer, target);
            match runner.run(&fallback) {
                Ok(()) => Ok(RevealOutcome::Launched {
                    explorer_name: display_name(explorer),
                }),
                Err(fallback_err) => Err(anyhow!(
                    "failed to open with both methods: {err}, {fallback_err}"
                )),
            }
        }
        Err(err) => Err(err),
    }
}
