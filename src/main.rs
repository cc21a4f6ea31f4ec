//! Terminal Tetris runner (default binary).
//!
//! Drives the rule engine at a fixed tick: drain key events, build the input
//! snapshot, advance one tick, then render the snapshot through the
//! framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tick_tetris::config::Config;
use tick_tetris::core::{GameSnapshot, GameState};
use tick_tetris::input::{should_quit, InputHandler};
use tick_tetris::session_log::SessionLog;
use tick_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Held keys outlive a tick by this much when the terminal reports releases.
const RELEASE_EVENTS_TIMEOUT_MS: u32 = 10_000;

/// How long the final frame stays up before the terminal is restored.
const GAME_OVER_HOLD: Duration = Duration::from_secs(2);

enum Outcome {
    GameOver,
    Quit,
}

fn main() -> Result<()> {
    let config = Config::parse();
    let seed = config.resolve_seed();

    // Fail on bad sizes or log paths before touching the terminal.
    let mut game = GameState::new(config.width, config.height, seed)
        .context("invalid playfield size")?;
    let mut log = match config.log_path.as_deref() {
        Some(path) => SessionLog::open(path)?,
        None => SessionLog::disabled(),
    };
    log.session_start(seed, config.width, config.height);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut log, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    let outcome = result?;

    log.flush();
    match outcome {
        Outcome::GameOver => println!("[Tetris] Session ended after {} ticks (seed {})", game.ticks(), seed),
        Outcome::Quit => println!("[Tetris] Quit after {} ticks (seed {})", game.ticks(), seed),
    }
    if !log.is_enabled() && config.log_path.is_some() {
        eprintln!("[Tetris] Session log was disabled after a write error");
    }
    println!("Game over!! Score: {}", game.score());
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    log: &mut SessionLog,
    config: &Config,
) -> Result<Outcome> {
    let view = GameView::default().with_glyphs(config.glyphs());
    let mut input = InputHandler::new();
    if term.release_events() {
        input = input.with_key_release_timeout_ms(RELEASE_EVENTS_TIMEOUT_MS);
    }

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut next_tick = Instant::now() + tick_duration;

    loop {
        // Input until the tick boundary.
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(Outcome::Quit);
                        }
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
        next_tick += tick_duration;
        // Drop missed ticks instead of replaying them in a burst.
        let now = Instant::now();
        if next_tick < now {
            next_tick = now + tick_duration;
        }

        let result = game.tick(input.snapshot(config.tick_ms));
        if let Some(lock) = result.lock.as_ref() {
            log.lock(game.ticks(), lock, game.score());
        }

        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if result.game_over {
            log.game_over(game.ticks(), game.score());
            hold_final_frame()?;
            return Ok(Outcome::GameOver);
        }
    }
}

/// Keep the last frame visible until a key press or the hold expires.
fn hold_final_frame() -> Result<()> {
    let deadline = Instant::now() + GAME_OVER_HOLD;
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if timeout.is_zero() || !event::poll(timeout)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
