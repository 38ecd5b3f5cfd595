//! Terminal memory game runner (default binary).
//!
//! Single launch entry point, no flags. Settings come from the environment
//! (see [`GameConfig`]). Input is read with crossterm (mouse clicks and
//! keyboard cursor) and frames are drawn through a diffing framebuffer
//! renderer.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use crossterm::event::{self, Event, KeyEventKind};
use simplelog::{Config, WriteLogger};

use tui_memory::engine::{AudioSink, GameConfig, NullAudio, Session};
use tui_memory::input::{handle_key_event, handle_mouse_event, should_quit, Cursor};
use tui_memory::term::{FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use tui_memory::types::{InputEvent, TICK_MS};

/// Collaborators the session talks to, owned by the binary.
struct Context {
    term: TerminalRenderer,
    audio: Box<dyn AudioSink>,
    view: GameView,
    fb: FrameBuffer,
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let session = Session::new(config.round.clone(), seed)
        .context("invalid round configuration")?
        .with_game_over_pause_ms(config.game_over_pause_ms);

    let audio: Box<dyn AudioSink> = if config.audio_disabled {
        Box::new(NullAudio)
    } else {
        Box::new(TerminalBell::new())
    };

    let mut ctx = Context {
        term: TerminalRenderer::new(),
        audio,
        view: GameView::default(),
        fb: FrameBuffer::new(0, 0),
    };
    ctx.term.enter()?;

    let result = run(&mut ctx, session);

    // Always try to restore terminal state.
    let _ = ctx.term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    // The game owns the terminal, so logs only go to a file.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path))?;
    WriteLogger::init(config.log_level, Config::default(), file)?;
    Ok(())
}

fn run(ctx: &mut Context, mut session: Session) -> Result<()> {
    let mut cursor = Cursor::new(session.config().rows, session.config().cols);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    session.start(ctx.audio.as_mut());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = session.snapshot();
        ctx.view
            .render_into(&snap, Some(cursor.position()), viewport, &mut ctx.fb);
        ctx.term.draw_swap(&mut ctx.fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        session.stop(ctx.audio.as_mut());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if let Some(pos) = cursor.apply(action) {
                            session.handle(InputEvent::Select(pos), ctx.audio.as_mut());
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = handle_mouse_event(mouse) {
                        if let Some(pos) = ctx.view.hit_test(&snap, viewport, x, y) {
                            cursor.move_to(pos);
                            session.handle(InputEvent::Select(pos), ctx.audio.as_mut());
                        }
                    }
                }
                Event::Resize(_, _) => ctx.term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis() as u32, ctx.audio.as_mut());
        }
    }
}
