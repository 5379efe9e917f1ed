use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";

/// Fixed logical name the high score is stored under.
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// Durable mirror of the high-score scalar.
///
/// Implementations must not fail: a broken store loads as 0 and skips saves.
pub trait HighScoreStore {
    fn load(&mut self) -> u32;
    fn save(&mut self, score: u32);
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to create score directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(format!("{HIGH_SCORE_KEY}.json"));
    base
}

/// Stores the high score as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the high score, returning `Ok(0)` when no file exists yet.
    pub fn try_load(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(ScoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str::<ScoreFile>(&raw)
            .map(|file| file.high_score)
            .map_err(|source| ScoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes the high score, creating parent directories when needed.
    pub fn try_save(&self, score: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ScoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let payload = ScoreFile { high_score: score };
        let json = serde_json::to_string_pretty(&payload).map_err(ScoreError::Serialize)?;

        fs::write(&self.path, json).map_err(|source| ScoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        match self.try_load() {
            Ok(score) => score,
            Err(error) => {
                log::warn!("{error}; starting with no high score");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Err(error) = self.try_save(score) {
            log::warn!("{error}; high score not saved");
        }
    }
}

/// In-memory store that remembers every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    initial: u32,
    saves: Vec<u32>,
}

impl MemoryStore {
    /// Store whose `load` returns `initial`.
    #[must_use]
    pub fn with_high_score(initial: u32) -> Self {
        Self {
            initial,
            saves: Vec::new(),
        }
    }

    /// Every value passed to `save`, oldest first.
    #[must_use]
    pub fn saves(&self) -> &[u32] {
        &self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.saves.last().copied().unwrap_or(self.initial)
    }

    fn save(&mut self, score: u32) {
        self.saves.push(score);
    }
}
