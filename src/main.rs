use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use neon_drop::audio::{BellPlayer, Cue, CuePlayer};
use neon_drop::core::{drop_interval_ms, Engine, LockResult};
use neon_drop::input;
use neon_drop::report::{JsonlReporter, NullReporter, ScoreReport, ScoreReporter};
use neon_drop::session::{default_profile_path, Profile};
use neon_drop::term::{GameView, Scene, TerminalRenderer, Viewport};
use neon_drop::types::{Command, GRID_COLS, GRID_ROWS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term);
    // Restore the terminal even when the game loop failed.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let profile_path = default_profile_path();
    let mut profile = profile_path
        .as_deref()
        .map(Profile::load)
        .unwrap_or_default();

    let mut reporter: Box<dyn ScoreReporter> = match JsonlReporter::default_path() {
        Some(path) => Box::new(JsonlReporter::new(path)),
        None => Box::new(NullReporter),
    };
    let mut player = BellPlayer::new(profile.muted);

    let view = GameView::new(Viewport::for_board(GRID_COLS, GRID_ROWS));
    let mut engine = Engine::with_defaults(seed_from_clock());
    let mut scene = Scene::Menu;
    let mut last_tick = Instant::now();

    loop {
        term.draw(&view.render(&engine, &profile, scene))?;

        match scene {
            Scene::Menu => {
                if let Event::Key(key) = event::read()? {
                    if input::should_quit(&key) {
                        break;
                    }
                    if input::map_key(&key) == Some(Command::ToggleMute) {
                        toggle_mute(&mut profile, &mut player, profile_path.as_deref());
                        continue;
                    }
                    engine = Engine::with_defaults(seed_from_clock());
                    last_tick = Instant::now();
                    scene = Scene::Playing;
                }
            }
            Scene::Playing => {
                let interval = Duration::from_millis(drop_interval_ms(engine.level()));
                let timeout = interval.saturating_sub(last_tick.elapsed());

                if event::poll(timeout)? {
                    match event::read()? {
                        Event::Key(key) => {
                            if input::should_quit(&key) {
                                break;
                            }
                            if let Some(command) = input::map_key(&key) {
                                if let Some(next) = apply_command(
                                    command,
                                    &mut engine,
                                    &mut profile,
                                    &mut player,
                                    reporter.as_mut(),
                                    profile_path.as_deref(),
                                ) {
                                    scene = next;
                                }
                            }
                        }
                        _ => {}
                    }
                }

                if scene == Scene::Playing && last_tick.elapsed() >= interval {
                    last_tick = Instant::now();
                    if let Some(lock) = engine.soft_drop() {
                        play_lock_cues(&lock, &mut player);
                        if lock.game_over {
                            finish_game(
                                &engine,
                                &mut profile,
                                reporter.as_mut(),
                                profile_path.as_deref(),
                            );
                            scene = Scene::GameOver;
                        }
                    }
                }
            }
            Scene::GameOver => {
                if let Event::Key(key) = event::read()? {
                    if input::should_quit(&key) {
                        break;
                    }
                    match input::map_key(&key) {
                        Some(Command::Restart) => {
                            engine = Engine::with_defaults(seed_from_clock());
                            last_tick = Instant::now();
                            scene = Scene::Playing;
                        }
                        Some(Command::ToggleMute) => {
                            toggle_mute(&mut profile, &mut player, profile_path.as_deref());
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    Ok(())
}

/// Run one command against the engine; `Some(scene)` requests a transition.
fn apply_command(
    command: Command,
    engine: &mut Engine,
    profile: &mut Profile,
    player: &mut BellPlayer,
    reporter: &mut dyn ScoreReporter,
    profile_path: Option<&std::path::Path>,
) -> Option<Scene> {
    let mut lock: Option<LockResult> = None;

    match command {
        Command::MoveLeft => {
            if engine.try_shift(-1) {
                player.play(Cue::Move);
            }
        }
        Command::MoveRight => {
            if engine.try_shift(1) {
                player.play(Cue::Move);
            }
        }
        Command::Rotate => {
            if engine.rotate() {
                player.play(Cue::Rotate);
            }
        }
        Command::SoftDrop => {
            lock = engine.soft_drop();
        }
        Command::HardDrop => {
            lock = engine.hard_drop().map(|(_, result)| result);
        }
        Command::ToggleMute => {
            toggle_mute(profile, player, profile_path);
        }
        Command::Restart => {
            *engine = Engine::with_defaults(seed_from_clock());
            return None;
        }
    }

    if let Some(lock) = lock {
        play_lock_cues(&lock, player);
        if lock.game_over {
            finish_game(engine, profile, reporter, profile_path);
            return Some(Scene::GameOver);
        }
    }
    None
}

fn play_lock_cues(lock: &LockResult, player: &mut BellPlayer) {
    if lock.lines_cleared > 0 {
        player.play(Cue::LineClear);
    } else {
        player.play(Cue::Lock);
    }
    if lock.game_over {
        player.play(Cue::GameOver);
    }
}

fn toggle_mute(
    profile: &mut Profile,
    player: &mut BellPlayer,
    profile_path: Option<&std::path::Path>,
) {
    profile.muted = !profile.muted;
    player.set_muted(profile.muted);
    save_profile(profile, profile_path);
}

/// Persist the best score and ship the final report. Both are best effort;
/// a full disk should not take the game-over screen down with it.
fn finish_game(
    engine: &Engine,
    profile: &mut Profile,
    reporter: &mut dyn ScoreReporter,
    profile_path: Option<&std::path::Path>,
) {
    if profile.record_score(engine.score()) {
        save_profile(profile, profile_path);
    }
    let _ = reporter.submit(&ScoreReport {
        score: engine.score(),
        lines: engine.lines(),
        level: engine.level(),
    });
}

fn save_profile(profile: &Profile, path: Option<&std::path::Path>) {
    if let Some(path) = path {
        let _ = profile.save(path);
    }
}
