use reveal_explorer::launcher::{
    launch_explorer, reveal, CommandRunner, LaunchCommand, Platform, RevealOutcome,
};
use reveal_explorer::settings::MemoryConfig;
use tempfile::tempdir;

/// Records every launch command and fails the first `failures` attempts.
#[derive(Default)]
struct RecordingRunner {
    commands: Vec<LaunchCommand>,
    failures: usize,
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, cmd: &LaunchCommand) -> anyhow::Result<()> {
        self.commands.push(cmd.clone());
        if self.commands.len() <= self.failures {
            anyhow::bail!("launch attempt {} failed", self.commands.len());
        }
        Ok(())
    }
}

/// Creates an explorer path that exists on disk, ending in `.app` so the
/// macOS bundle rules apply.
fn existing_app(dir: &std::path::Path) -> String {
    let app = dir.join("Fake Finder.app");
    std::fs::create_dir(&app).unwrap();
    app.display().to_string()
}

#[test]
fn unconfigured_reveal_issues_no_commands() {
    let cfg = MemoryConfig::default();
    let mut runner = RecordingRunner::default();
    let out = reveal("/tmp/file", &cfg, &mut runner, Platform::MacOs).unwrap();
    assert_eq!(out, RevealOutcome::NotConfigured);
    assert!(runner.commands.is_empty());
}

#[test]
fn empty_explorer_path_counts_as_unconfigured() {
    let cfg = MemoryConfig {
        explorer_path: Some(String::new()),
        ..Default::default()
    };
    let mut runner = RecordingRunner::default();
    let out = reveal("/tmp/file", &cfg, &mut runner, Platform::Other).unwrap();
    assert_eq!(out, RevealOutcome::NotConfigured);
}

#[test]
fn missing_target_is_an_error() {
    let cfg = MemoryConfig::default();
    let mut runner = RecordingRunner::default();
    for target in ["", "   "] {
        let err = reveal(target, &cfg, &mut runner, Platform::Other).unwrap_err();
        assert!(err.to_string().contains("no file or folder selected"));
    }
    assert!(runner.commands.is_empty());
}

#[test]
fn missing_explorer_aborts_before_launch() {
    let cfg = MemoryConfig {
        explorer_path: Some("/definitely/not/here.app".into()),
        ..Default::default()
    };
    let mut runner = RecordingRunner::default();
    let err = reveal("/tmp/file", &cfg, &mut runner, Platform::MacOs).unwrap_err();
    assert!(err.to_string().contains("not found at"));
    assert!(runner.commands.is_empty());
}

#[test]
fn successful_reveal_issues_exactly_one_command() {
    let dir = tempdir().unwrap();
    let explorer = existing_app(dir.path());
    let cfg = MemoryConfig {
        explorer_path: Some(explorer.clone()),
        ..Default::default()
    };
    let mut runner = RecordingRunner::default();
    let out = reveal("/tmp/file", &cfg, &mut runner, Platform::MacOs).unwrap();
    assert_eq!(
        out,
        RevealOutcome::Launched {
            explorer_name: "Fake Finder".into()
        }
    );
    assert_eq!(runner.commands.len(), 1);
    assert_eq!(runner.commands[0].program, "open");
    assert_eq!(
        runner.commands[0].args,
        vec!["-a", explorer.as_str(), "/tmp/file"]
    );
}

/// After configuring, the returned path is launched as-is; the configuration
/// is not consulted for the explorer path again.
#[test]
fn freshly_configured_path_launches_without_config_read() {
    let dir = tempdir().unwrap();
    let explorer = existing_app(dir.path());
    let mut runner = RecordingRunner::default();
    let out = launch_explorer(&explorer, "/tmp/file", false, &mut runner, Platform::MacOs).unwrap();
    assert_eq!(
        out,
        RevealOutcome::Launched {
            explorer_name: "Fake Finder".into()
        }
    );
    assert_eq!(runner.commands.len(), 1);
    assert_eq!(runner.commands[0].args[1], explorer);
}

#[test]
fn bundle_launch_failure_retries_via_open_once() {
    let dir = tempdir().unwrap();
    let explorer = existing_app(dir.path());
    let cfg = MemoryConfig {
        explorer_path: Some(explorer.clone()),
        ..Default::default()
    };
    // One failure: the first (indirect, because of the bundle suffix on
    // macOS) attempt fails, the fallback succeeds.
    let mut runner = RecordingRunner {
        failures: 1,
        ..Default::default()
    };
    let out = reveal("/tmp/file", &cfg, &mut runner, Platform::MacOs).unwrap();
    assert!(matches!(out, RevealOutcome::Launched { .. }));
    assert_eq!(runner.commands.len(), 2);
    assert!(runner.commands[1].is_indirect());
}

#[test]
fn double_failure_reports_both_errors() {
    let dir = tempdir().unwrap();
    let explorer = existing_app(dir.path());
    let cfg = MemoryConfig {
        explorer_path: Some(explorer),
        ..Default::default()
    };
    let mut runner = RecordingRunner {
        failures: 2,
        ..Default::default()
    };
    let err = reveal("/tmp/file", &cfg, &mut runner, Platform::MacOs).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to open with both methods"));
    assert!(msg.contains("launch attempt 1 failed"));
    assert!(msg.contains("launch attempt 2 failed"));
    assert_eq!(runner.commands.len(), 2);
}

#[test]
fn no_fallback_when_open_command_forced() {
    let dir = tempdir().unwrap();
    let explorer = existing_app(dir.path());
    let cfg = MemoryConfig {
        explorer_path: Some(explorer),
        use_open_command: true,
        ..Default::default()
    };
    let mut runner = RecordingRunner {
        failures: 1,
        ..Default::default()
    };
    let err = reveal("/tmp/file", &cfg, &mut runner, Platform::MacOs).unwrap_err();
    assert!(err.to_string().contains("launch attempt 1 failed"));
    assert_eq!(runner.commands.len(), 1);
}

#[test]
fn no_fallback_for_plain_binaries() {
    let dir = tempdir().unwrap();
    let bin = dir.path().join("mc");
    std::fs::write(&bin, b"").unwrap();
    let cfg = MemoryConfig {
        explorer_path: Some(bin.display().to_string()),
        ..Default::default()
    };
    let mut runner = RecordingRunner {
        failures: 1,
        ..Default::default()
    };
    let err = reveal("/tmp/file", &cfg, &mut runner, Platform::MacOs).unwrap_err();
    assert!(err.to_string().contains("launch attempt 1 failed"));
    assert_eq!(runner.commands.len(), 1);
}
