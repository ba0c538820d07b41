//! Final-score reporting.
//!
//! When a game ends the shell hands the result to a [`ScoreReporter`]. The
//! default sink appends one JSON object per line to a local file, which is
//! trivial to tail or post-process; [`NullReporter`] discards everything for
//! tests and for players who opt out.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

/// One finished game.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreReport {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

pub trait ScoreReporter {
    fn submit(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
}

/// Appends reports as JSON lines to a file.
#[derive(Debug, Clone)]
pub struct JsonlReporter {
    path: PathBuf,
}

impl JsonlReporter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default sink next to the profile: `$HOME/.neon-drop/scores.jsonl`.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".neon-drop").join("scores.jsonl"))
    }
}

impl ScoreReporter for JsonlReporter {
    fn submit(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating score directory {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening score log {}", self.path.display()))?;
        let line = serde_json::to_string(report)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ScoreReporter for NullReporter {
    fn submit(&mut self, _report: &ScoreReport) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonl_reporter_appends_one_line_per_game() {
        let dir = std::env::temp_dir().join(format!("neon-drop-scores-{}", std::process::id()));
        let path = dir.join("scores.jsonl");
        let mut reporter = JsonlReporter::new(path.clone());

        reporter
            .submit(&ScoreReport {
                score: 800,
                lines: 4,
                level: 1,
            })
            .unwrap();
        reporter
            .submit(&ScoreReport {
                score: 1500,
                lines: 12,
                level: 2,
            })
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = raw.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["score"], 800);
        assert_eq!(first["lines"], 4);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["level"], 2);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn null_reporter_always_succeeds() {
        let mut reporter = NullReporter;
        assert!(reporter
            .submit(&ScoreReport {
                score: 0,
                lines: 0,
                level: 1,
            })
            .is_ok());
    }
}
