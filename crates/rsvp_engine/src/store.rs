use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use rsvp_core::ReaderSettings;
use rsvp_logging::{rsvp_error, rsvp_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Persistent store for the playback settings record.
///
/// Loading never fails: absence or any read/parse problem yields the
/// defaults. Saving is best-effort; failures are logged, not surfaced.
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> ReaderSettings;
    async fn save(&self, settings: &ReaderSettings);
}

/// On-disk serde mirror of [`ReaderSettings`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSettings {
    wpm: u32,
    max_chars: usize,
}

/// Settings persisted as a single ron record, replaced atomically via a
/// temp file in the same directory.
#[derive(Debug, Clone)]
pub struct RonSettingsStore {
    path: PathBuf,
}

impl RonSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn write_atomic(&self, content: &str) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl SettingsStore for RonSettingsStore {
    async fn load(&self) -> ReaderSettings {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return ReaderSettings::default();
            }
            Err(err) => {
                rsvp_warn!("failed to read settings from {:?}: {}", self.path, err);
                return ReaderSettings::default();
            }
        };

        match ron::from_str::<PersistedSettings>(&content) {
            Ok(record) => ReaderSettings::new(record.wpm, record.max_chars).clamped(),
            Err(err) => {
                rsvp_warn!("failed to parse settings from {:?}: {}", self.path, err);
                ReaderSettings::default()
            }
        }
    }

    async fn save(&self, settings: &ReaderSettings) {
        let record = PersistedSettings {
            wpm: settings.wpm,
            max_chars: settings.max_chars,
        };

        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&record, pretty) {
            Ok(text) => text,
            Err(err) => {
                rsvp_error!("failed to serialize settings: {}", err);
                return;
            }
        };

        if let Err(err) = self.write_atomic(&content) {
            rsvp_error!("failed to write settings to {:?}: {}", self.path, err);
        }
    }
}

/// In-memory store for tests and keyless runs.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    inner: Mutex<Option<ReaderSettings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ReaderSettings) -> Self {
        Self {
            inner: Mutex::new(Some(settings)),
        }
    }

    /// The last saved record, if any.
    pub fn saved(&self) -> Option<ReaderSettings> {
        self.inner.lock().ok().and_then(|guard| *guard)
    }
}

#[async_trait::async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self) -> ReaderSettings {
        self.saved().unwrap_or_default().clamped()
    }

    async fn save(&self, settings: &ReaderSettings) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(*settings);
        }
    }
}
