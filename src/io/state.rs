use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

pub const STATE_FILE: &str = "state.json";

/// Error type for persisted UI state
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize state: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Persisted TUI state (written to state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// "dark" or "light"
    #[serde(default)]
    pub theme: Option<String>,
}

impl UiState {
    pub fn is_dark(&self) -> bool {
        self.theme.as_deref() == Some("dark")
    }
}

/// Durable dark/light choice. `true` means dark.
pub trait ThemePreference {
    /// Read the saved choice. Anything other than a saved "dark" is light.
    fn load(&self) -> bool;
    fn save(&mut self, dark: bool) -> Result<(), StateError>;
}

fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Theme preference stored in `state.json` inside the config directory
#[derive(Debug, Clone)]
pub struct FileThemePreference {
    dir: PathBuf,
}

impl FileThemePreference {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileThemePreference { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }
}

impl ThemePreference for FileThemePreference {
    fn load(&self) -> bool {
        read_ui_state(&self.dir).is_some_and(|s| s.is_dark())
    }

    fn save(&mut self, dark: bool) -> Result<(), StateError> {
        let state = UiState {
            theme: Some(theme_name(dark).to_string()),
        };
        write_ui_state(&self.dir, &state)?;
        tracing::info!(theme = theme_name(dark), path = %self.path().display(), "saved theme");
        Ok(())
    }
}

/// Theme preference that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryThemePreference {
    saved: Option<bool>,
}

impl MemoryThemePreference {
    pub fn new(dark: Option<bool>) -> Self {
        MemoryThemePreference { saved: dark }
    }
}

impl ThemePreference for MemoryThemePreference {
    fn load(&self) -> bool {
        self.saved.unwrap_or(false)
    }

    fn save(&mut self, dark: bool) -> Result<(), StateError> {
        self.saved = Some(dark);
        Ok(())
    }
}

/// Read state.json from the config directory
pub fn read_ui_state(dir: &Path) -> Option<UiState> {
    let path = dir.join(STATE_FILE);
    let content = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed state file");
            None
        }
    }
}

/// Write state.json to the config directory, creating it if needed
pub fn write_ui_state(dir: &Path, state: &UiState) -> Result<(), StateError> {
    let path = dir.join(STATE_FILE);
    let content = serde_json::to_string_pretty(state)?;
    let to_write_error = |source| StateError::WriteError {
        path: path.clone(),
        source,
    };
    fs::create_dir_all(dir).map_err(to_write_error)?;
    atomic_write(&path, content.as_bytes()).map_err(to_write_error)
}

/// Write via a temp file in the same directory and rename over the target
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
