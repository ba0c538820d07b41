//! Player profile persistence: best score and mute preference.
//!
//! The profile lives in a small JSON file under the player's home directory.
//! Loading is infallible (a missing or corrupt file yields the default
//! profile); saving surfaces IO errors so the caller can decide how loudly
//! to complain.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Persisted per-player state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub best_score: u32,
    #[serde(default)]
    pub muted: bool,
}

impl Profile {
    /// Load a profile from `path`, falling back to the default when the file
    /// is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Write the profile to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating profile directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("writing profile {}", path.display()))?;
        Ok(())
    }

    /// Fold a finished game's score into the profile.
    ///
    /// Returns true when `score` sets a new best.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.best_score {
            self.best_score = score;
            true
        } else {
            false
        }
    }
}

/// Default on-disk location: `$HOME/.neon-drop/profile.json`.
///
/// `None` when the environment gives us no home directory.
pub fn default_profile_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".neon-drop").join("profile.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_default() {
        let profile = Profile::load(Path::new("/nonexistent/neon-drop/profile.json"));
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn record_score_tracks_best_only() {
        let mut profile = Profile::default();
        assert!(profile.record_score(500));
        assert_eq!(profile.best_score, 500);

        assert!(!profile.record_score(300));
        assert_eq!(profile.best_score, 500);

        assert!(!profile.record_score(500));
        assert!(profile.record_score(501));
    }

    #[test]
    fn roundtrips_through_disk() {
        let dir = std::env::temp_dir().join(format!("neon-drop-test-{}", std::process::id()));
        let path = dir.join("profile.json");

        let profile = Profile {
            best_score: 4200,
            muted: true,
        };
        profile.save(&path).unwrap();
        assert_eq!(Profile::load(&path), profile);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = std::env::temp_dir().join(format!("neon-drop-corrupt-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("profile.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(Profile::load(&path), Profile::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"best_score": 900}"#).unwrap();
        assert_eq!(profile.best_score, 900);
        assert!(!profile.muted);
    }
}
