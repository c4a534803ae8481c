use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::state::{App, Exit, PickerOutcome};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Run `app` in the terminal until the user accepts or cancels.
pub fn run(mut app: App<'_>) -> Result<PickerOutcome> {
	let exit = app.run()?;
	log::info!(
		"picker finished: {:?} with {} dependencies",
		exit,
		app.project().dependencies.len()
	);
	Ok(app.finish(exit))
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until a key ends the session.
	fn run(&mut self) -> Result<Exit> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let input_running = Arc::new(AtomicBool::new(true));
		let input_flag = Arc::clone(&input_running);

		let input_thread = thread::spawn(move || -> Result<()> {
			while input_flag.load(Ordering::Relaxed) {
				if event::poll(POLL_INTERVAL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending = VecDeque::new();

		let result: Result<Exit> = 'session: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'session Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let mut exit = None;
			while let Some(event) = pending.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(ended) = self.handle_key(key)
				{
					exit = Some(ended);
					break;
				}
			}
			if let Some(exit) = exit {
				break Ok(exit);
			}

			thread::sleep(FRAME_INTERVAL);
		};

		ratatui::restore();

		input_running.store(false, Ordering::Relaxed);
		match input_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
