//! Audio cues.
//!
//! The engine knows nothing about sound; the shell translates command
//! results into [`Cue`]s and feeds them to a [`CuePlayer`]. In a terminal
//! the best we can do without an audio stack is the BEL character, so
//! [`BellPlayer`] rings it for the percussive cues and stays quiet for the
//! rest. The trait keeps a real backend pluggable later.

use std::io::Write;

/// Game events that deserve a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Move,
    Rotate,
    Lock,
    LineClear,
    GameOver,
}

pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
    fn set_muted(&mut self, muted: bool);
    fn muted(&self) -> bool;
}

/// Terminal bell backend.
///
/// Only the loud events ring; moves and rotations would turn the bell into
/// noise at any reasonable input rate.
#[derive(Debug)]
pub struct BellPlayer {
    muted: bool,
}

impl BellPlayer {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }
}

impl CuePlayer for BellPlayer {
    fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        let ring = matches!(cue, Cue::Lock | Cue::LineClear | Cue::GameOver);
        if ring {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn muted(&self) -> bool {
        self.muted
    }
}

/// No-op backend for tests and headless runs.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    muted: bool,
}

impl CuePlayer for SilentPlayer {
    fn play(&mut self, _cue: Cue) {}

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mute_toggle_roundtrips() {
        let mut player = BellPlayer::new(false);
        assert!(!player.muted());
        player.set_muted(true);
        assert!(player.muted());
        // Playing while muted is a no-op, not an error.
        player.play(Cue::GameOver);
        player.set_muted(false);
        assert!(!player.muted());
    }

    #[test]
    fn silent_player_swallows_everything() {
        let mut player = SilentPlayer::default();
        for cue in [Cue::Move, Cue::Rotate, Cue::Lock, Cue::LineClear, Cue::GameOver] {
            player.play(cue);
        }
        assert!(!player.muted());
    }
}
