use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";

/// Environment variable overriding the settings file location. Mainly useful
/// for scripting and tests.
pub const CONFIG_PATH_ENV: &str = "REVEAL_EXPLORER_CONFIG";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    /// Absolute path to the external file manager. `None` or an empty string
    /// means no explorer has been configured yet.
    pub explorer_path: Option<String>,
    /// Always launch through `open -a`, even when a direct launch would
    /// otherwise be attempted.
    #[serde(default)]
    pub use_open_command: bool,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Location of the settings file: `$REVEAL_EXPLORER_CONFIG` if set, otherwise
/// `<config_dir>/reveal_explorer/settings.json`, falling back to the current
/// directory when no config directory is available.
pub fn default_config_path() -> PathBuf {
    if let Ok(p) = std::env::var(CONFIG_PATH_ENV) {
        if !p.is_empty() {
            return PathBuf::from(p);
        }
    }
    dirs_next::config_dir()
        .map(|d| d.join("reveal_explorer").join(SETTINGS_FILE))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}

/// Read/write access to the persisted configuration. Injected into both the
/// reveal and configure flows so tests can substitute an in-memory fake.
pub trait ConfigProvider {
    /// Currently configured explorer path, if any. Empty strings are
    /// normalised to `None`.
    fn explorer_path(&self) -> Option<String>;
    fn use_open_command(&self) -> bool;
    fn debug_logging(&self) -> bool;
    fn set_explorer_path(&mut self, path: &str) -> anyhow::Result<()>;
    fn set_use_open_command(&mut self, value: bool) -> anyhow::Result<()>;
    fn set_debug_logging(&mut self, value: bool) -> anyhow::Result<()>;
}

/// File-backed provider. Every getter re-reads the settings file so a value
/// written by another invocation is picked up without restarting.
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_location() -> Self {
        Self::new(default_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Settings {
        Settings::load(&self.path).unwrap_or_else(|e| {
            tracing::warn!("failed to parse {}: {e}", self.path.display());
            Settings::default()
        })
    }
}

impl ConfigProvider for FileConfig {
    fn explorer_path(&self) -> Option<String> {
        self.read().explorer_path.filter(|p| !p.is_empty())
    }

    fn use_open_command(&self) -> bool {
        self.read().use_open_command
    }

    fn debug_logging(&self) -> bool {
        self.read().debug_logging
    }

    fn set_explorer_path(&mut self, path: &str) -> anyhow::Result<()> {
        // Read-modify-write so unrelated keys survive.
        let mut settings = self.read();
        settings.explorer_path = Some(path.to_string());
        settings.save(&self.path)
    }

    fn set_use_open_command(&mut self, value: bool) -> anyhow::Result<()> {
        let mut settings = self.read();
        settings.use_open_command = value;
        settings.save(&self.path)
    }

    fn set_debug_logging(&mut self, value: bool) -> anyhow::Result<()> {
        let mut settings = self.read();
        settings.debug_logging = value;
        settings.save(&self.path)
    }
}

/// In-memory provider used by tests.
#[derive(Default)]
pub struct MemoryConfig {
    pub explorer_path: Option<String>,
    pub use_open_command: bool,
    pub debug_logging: bool,
}

impl ConfigProvider for MemoryConfig {
    fn explorer_path(&self) -> Option<String> {
        self.explorer_path.clone().filter(|p| !p.is_empty())
    }

    fn use_open_command(&self) -> bool {
        self.use_open_command
    }

    fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    fn set_explorer_path(&mut self, path: &str) -> anyhow::Result<()> {
        self.explorer_path = Some(path.to_string());
        Ok(())
    }

    fn set_use_open_command(&mut self, value: bool) -> anyhow::Result<()> {
        self.use_open_command = value;
        Ok(())
    }

    fn set_debug_logging(&mut self, value: bool) -> anyhow::Result<()> {
        self.debug_logging = value;
        Ok(())
    }
}
