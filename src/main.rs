//! Terminal runner (default binary).
//!
//! Frame loop at ~30 Hz: render the current snapshot, poll input until the
//! frame deadline, then advance gravity with the measured wall-clock time.
//! Gravity cadence is therefore independent of render cadence.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::audio::Sfx;
use blockfall::core::{GameSession, GameSnapshot};
use blockfall::input::map_key_event;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{InputEvent, FRAME_MS, GAME_OVER_HOLD_MS};

fn main() -> Result<()> {
    // Collaborator failures surface here, before the terminal is touched.
    let mut sounds = Sfx::new()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut sounds);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, sounds: &mut Sfx) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = GameSession::new(seed);

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Terminal phase: leave the last frame up while the sound finishes.
        if session.game_over() {
            thread::sleep(Duration::from_millis(GAME_OVER_HOLD_MS));
            return Ok(());
        }

        // Input with timeout until the next frame deadline.
        let timeout = frame
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key_event(key) {
                        Some(InputEvent::Quit) => return Ok(()),
                        Some(InputEvent::Key(game_key)) => {
                            session.handle_key(game_key);
                        }
                        None => {}
                    }
                }
            }
        }

        // Gravity tick with the actual elapsed wall-clock time.
        if last_tick.elapsed() >= frame {
            let elapsed = last_tick.elapsed();
            last_tick = Instant::now();
            session.tick(elapsed.as_millis() as u32, sounds);
        }
    }
}
