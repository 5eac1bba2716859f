//! Best-Score Persistence
//!
//! Stores the best score ever displayed on the score screen as a small JSON
//! file under the user's home directory. This is the only state that
//! survives a restart; a missing or corrupt file just means no best score
//! yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const SCORE_FILE: &str = "best_score.json";

/// The persisted record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestScore {
    pub score: i32,
    /// Local time the score was achieved, e.g. "2026-08-30 14:07:12"
    pub achieved: String,
}

/// Error types for score file operations
#[derive(Debug)]
pub enum ScoreFileError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for ScoreFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreFileError::Io(e) => write!(f, "score file IO error: {}", e),
            ScoreFileError::Serialization(e) => write!(f, "score file format error: {}", e),
        }
    }
}

impl From<std::io::Error> for ScoreFileError {
    fn from(e: std::io::Error) -> Self {
        ScoreFileError::Io(e)
    }
}

impl From<serde_json::Error> for ScoreFileError {
    fn from(e: serde_json::Error) -> Self {
        ScoreFileError::Serialization(e)
    }
}

/// Loads, compares and writes the best score.
pub struct ScoreBoard {
    directory: PathBuf,
    best: Option<BestScore>,
}

impl ScoreBoard {
    /// Opens the score board in `directory`, creating it if needed and
    /// loading any existing record.
    ///
    /// A corrupt file is reported and treated as empty rather than failing
    /// startup.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, ScoreFileError> {
        let directory = directory.as_ref().to_path_buf();
        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }

        let path = directory.join(SCORE_FILE);
        let best = if path.exists() {
            match fs::read_to_string(&path)
                .map_err(ScoreFileError::from)
                .and_then(|json| serde_json::from_str(&json).map_err(ScoreFileError::from))
            {
                Ok(record) => Some(record),
                Err(e) => {
                    eprintln!("Warning: ignoring unreadable score file: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(ScoreBoard { directory, best })
    }

    /// Default location: `~/.power_toss`, falling back to the working
    /// directory when no home directory is available.
    pub fn default_directory() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".power_toss"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn best(&self) -> Option<&BestScore> {
        self.best.as_ref()
    }

    /// Records `score` if it beats the stored best. Returns `true` when a
    /// new best was written.
    pub fn submit(&mut self, score: i32) -> Result<bool, ScoreFileError> {
        if let Some(best) = &self.best {
            if score <= best.score {
                return Ok(false);
            }
        }

        let record = BestScore {
            score,
            achieved: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let json = serde_json::to_string_pretty(&record)?;
        fs::write(self.directory.join(SCORE_FILE), json)?;

        self.best = Some(record);
        Ok(true)
    }
}
