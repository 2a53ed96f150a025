//! Terminal photo games runner (default binary).
//!
//! `photo-games` opens the interactive menu. `photo-games play <game> ...`
//! plays a scripted click sequence headlessly and prints the final snapshot
//! as JSON.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, MouseButton, MouseEventKind};

use photo_games::app::App;
use photo_games::config::AppConfig;
use photo_games::input::{handle_key_event, should_quit};
use photo_games::logging;
use photo_games::script::{self, parse_play_args};
use photo_games::term::{
    fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};

/// Redraw at least this often even when nothing changed.
const HEARTBEAT_MS: u64 = 1000;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    let _log_guard = logging::init(config.log_dir.as_deref())?;
    let photos = config.catalog()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(play) = parse_play_args(&args)? {
        let snapshot = script::run(&play, &photos)?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    tracing::info!(seed = config.seed, photos = photos.len(), "starting");
    let mut app = App::new(&config, photos);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, config.tick_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App, tick_ms: u32) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(HEARTBEAT_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(tick_ms));

    loop {
        // Render.
        let (w, h) = term.size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let frame = app.frame();
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint(&frame)) {
            view.render_into(&frame.scene(), app.photos(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) => {
                    if should_quit(key) {
                        tracing::info!("quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        app.click_at(&view, viewport, mouse.column, mouse.row)?;
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis() as u32);
        }
    }
}
