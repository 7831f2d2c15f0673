//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::{App, PickerOutcome};

impl App {
	/// Pump the terminal event loop until the user chooses or cancels.
	///
	/// The terminal is restored and the input thread joined however the loop
	/// ends, including on draw errors.
	pub fn run(&mut self) -> Result<PickerOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(stdout(), EnableMouseCapture) {
			ratatui::restore();
			return Err(err.into());
		}

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

		let result = self.event_loop(&mut terminal, &event_rx);

		ratatui::restore();
		let released = execute!(stdout(), DisableMouseCapture);

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		released?;
		result
	}

	/// Draw and handle `events` until one of them yields an outcome.
	pub(crate) fn event_loop<B: Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
		events: &mpsc::Receiver<Event>,
	) -> Result<PickerOutcome> {
		terminal.clear()?;
		let mut pending_events = VecDeque::new();

		loop {
			loop {
				match events.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => None,
				};
				if let Some(outcome) = outcome {
					return Ok(outcome);
				}
			}

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io;

	use country_picker_data::Country;
	use ratatui::backend::{ClearType, TestBackend, WindowSize};
	use ratatui::buffer::Cell;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
	use ratatui::layout::{Position, Size};

	use super::*;
	use crate::picker::{CountryPicker, PickerProps};

	fn app() -> App {
		App::new(CountryPicker::new(PickerProps::new(), |_: &Country| {}))
	}

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	/// Terminal whose frames can never be flushed.
	struct BrokenScreen(TestBackend);

	impl Backend for BrokenScreen {
		fn draw<'a, I>(&mut self, _content: I) -> io::Result<()>
		where
			I: Iterator<Item = (u16, u16, &'a Cell)>,
		{
			Err(io::Error::other("screen went away"))
		}

		fn hide_cursor(&mut self) -> io::Result<()> {
			self.0.hide_cursor()
		}

		fn show_cursor(&mut self) -> io::Result<()> {
			self.0.show_cursor()
		}

		fn get_cursor_position(&mut self) -> io::Result<Position> {
			self.0.get_cursor_position()
		}

		fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
			self.0.set_cursor_position(position)
		}

		fn clear(&mut self) -> io::Result<()> {
			self.0.clear()
		}

		fn clear_region(&mut self, clear_type: ClearType) -> io::Result<()> {
			self.0.clear_region(clear_type)
		}

		fn size(&self) -> io::Result<Size> {
			self.0.size()
		}

		fn window_size(&mut self) -> io::Result<WindowSize> {
			self.0.window_size()
		}

		fn flush(&mut self) -> io::Result<()> {
			self.0.flush()
		}
	}

	#[test]
	fn queued_keys_end_the_loop() {
		let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
		let (tx, rx) = mpsc::channel();
		tx.send(key(KeyCode::Enter)).unwrap();
		tx.send(key(KeyCode::Esc)).unwrap();
		tx.send(key(KeyCode::Char('q'))).unwrap();

		let mut app = app();
		let outcome = app.event_loop(&mut terminal, &rx).unwrap();
		assert!(!outcome.accepted);
		assert!(!app.picker.is_open());
	}

	#[test]
	fn draw_errors_are_returned_to_the_caller() {
		let mut terminal = Terminal::new(BrokenScreen(TestBackend::new(60, 20))).unwrap();
		let (_tx, rx) = mpsc::channel();

		let error = app().event_loop(&mut terminal, &rx).unwrap_err();
		assert!(error.to_string().contains("screen went away"));
	}

	#[test]
	fn closed_input_channel_ends_the_loop() {
		let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
		let (tx, rx) = mpsc::channel::<Event>();
		drop(tx);

		let error = app().event_loop(&mut terminal, &rx).unwrap_err();
		assert!(error.to_string().contains("disconnected"));
	}
}
