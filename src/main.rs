//! Terminal endless runner (default binary).
//!
//! One fixed-rate loop: drain input, advance the menu (which drives the active
//! session), draw, then sleep out the frame budget.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use tui_runner::config::{self, Args};
use tui_runner::core::{
    Clock, Control, FramePacer, MenuSettings, MenuStateMachine, MonotonicClock, SessionSnapshot,
};
use tui_runner::input::{EventBatch, InputSource, TerminalInput};
use tui_runner::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();
    config::init_logging(args.log_file.as_deref())?;
    let settings = args.menu_settings()?;
    log::info!(
        "starting: difficulty={} character={} seed={} tick_ms={}",
        settings.difficulty.name,
        settings.character.name(),
        settings.seed,
        args.tick_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, settings, args.tick_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, settings: MenuSettings, tick_ms: u32) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut pacer = FramePacer::new(tick_ms, Instant::now());
    let mut input = TerminalInput::new();
    let mut menu = MenuStateMachine::new(settings);

    let view = SceneView::new();
    let mut events = EventBatch::new();
    let mut session_snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        events.clear();
        input.poll(&mut events)?;
        if input.take_resized() {
            term.invalidate();
        }

        if menu.tick(clock.now_ms(), &events) == Control::Quit {
            log::info!("quit");
            return Ok(());
        }

        let session = match menu.session() {
            Some(s) => {
                s.snapshot_into(&mut session_snap);
                Some(&session_snap)
            }
            None => None,
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&menu.snapshot(), session, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        pacer.wait();
    }
}
