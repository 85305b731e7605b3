mod display;
mod input;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    style::Print,
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use food_slicer::audio::{dispatch_events, AudioSink, SoundCue};
use food_slicer::compute::{new_session, reset, tick};
use food_slicer::config::GameConfig;
use food_slicer::entities::{GameSession, GameStatus, TickInput};
use food_slicer::pose::fingertips_or_empty;
use food_slicer::render;

use input::MousePose;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Rings the terminal bell once per frame in which any cue was played.
#[derive(Default)]
struct TerminalBell {
    pending: bool,
}

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("bell for {}", cue.name());
        self.pending = true;
    }
}

impl TerminalBell {
    fn ring<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        if std::mem::take(&mut self.pending) {
            out.queue(Print('\x07'))?;
            out.flush()?;
        }
        Ok(())
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum Control {
    Continue,
    Restart,
    Quit,
}

fn handle_key(code: KeyCode, modifiers: KeyModifiers, session: &GameSession) -> Control {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Control::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') if session.status == GameStatus::GameOver => {
            Control::Restart
        }
        _ => Control::Continue,
    }
}

/// One tick per frame: drain input, advance the session, draw, ring.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut pose = MousePose::new(
        session.config.viewport_width,
        session.config.viewport_height,
        cols,
        rows.saturating_sub(1),
    );
    let mut bell = TerminalBell::default();
    let start = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut restart = false;
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => match handle_key(code, modifiers, session) {
                    Control::Quit => return Ok(()),
                    Control::Restart => restart = true,
                    Control::Continue => {}
                },
                Event::Mouse(mouse) => pose.handle(mouse),
                Event::Resize(cols, rows) => pose.resize(cols, rows.saturating_sub(1)),
                _ => {}
            }
        }

        let now = start.elapsed();
        if restart {
            *session = reset(session, now);
        }

        if session.status == GameStatus::Playing {
            let fingertips = fingertips_or_empty(&mut pose);
            let outcome = tick(session, &TickInput::frame(fingertips, now), rng);
            dispatch_events(&outcome.events, &mut bell);
            *session = outcome.state;
        }

        display::render(out, session, &render::render(session))?;
        bell.ring(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn load_config() -> Result<GameConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Configuration errors surface before the terminal is touched.
    let config = load_config()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = new_session(config, Duration::ZERO).context("starting session")?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut session, &rx, &mut rng);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if result.is_ok() {
        println!("Final score: {}", session.score);
    }
    result
}
