use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::app::App;
use crate::outcome::SearchOutcome;
use crate::render;

/// Construct an [`App`]-driven picker and run it to completion.
///
/// Must be called from within a tokio runtime context: the controller spawns
/// its request tasks onto the ambient runtime while this thread stays inside
/// the blocking event loop.
pub fn run(mut app: App) -> Result<SearchOutcome> {
    let mut terminal = ratatui::init();
    terminal.clear()?;

    // Synthetic query-change on mount: the default/initial result set loads
    // without any user input.
    let initial = app.input.text().to_string();
    app.controller.on_query_change(&initial);

    let (event_tx, event_rx) = mpsc::channel();
    let event_loop_running = Arc::new(AtomicBool::new(true));
    let event_loop_flag = Arc::clone(&event_loop_running);

    let event_thread = thread::spawn(move || -> Result<()> {
        while event_loop_flag.load(Ordering::Relaxed) {
            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        }
        Ok(())
    });

    let mut pending_events = VecDeque::new();

    let result: Result<SearchOutcome> = 'event_loop: loop {
        app.controller.pump();
        app.ensure_selection();
        if app.controller.store().is_loading() {
            app.throbber_state.calc_next();
        }

        loop {
            match event_rx.try_recv() {
                Ok(Event::Resize(_, _)) => {}
                Ok(event) => pending_events.push_back(event),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    break 'event_loop Err(anyhow!("input event channel disconnected"));
                }
            }
        }

        terminal.draw(|frame| render::draw(frame, &mut app))?;

        let mut maybe_outcome = None;
        while let Some(event) = pending_events.pop_front() {
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
                && let Some(outcome) = app.handle_key(key)
            {
                maybe_outcome = Some(outcome);
                break;
            }
        }

        if let Some(outcome) = maybe_outcome {
            break Ok(outcome);
        }

        thread::sleep(Duration::from_millis(16));
    };

    ratatui::restore();

    event_loop_running.store(false, Ordering::Relaxed);
    match event_thread.join() {
        Ok(join_result) => join_result?,
        Err(err) => std::panic::resume_unwind(err),
    }

    app.controller.dispose();
    result
}
