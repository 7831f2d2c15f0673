//! In-UI log pane fed by `tui-logger`.

use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

use crate::style::Theme;

/// Toggleable pane showing the records captured by the `tui-logger` sink.
pub struct LogPane {
	visible: bool,
	state: TuiWidgetState,
}

impl Default for LogPane {
	fn default() -> Self {
		Self::new()
	}
}

impl LogPane {
	#[must_use]
	pub fn new() -> Self {
		Self {
			visible: false,
			state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
		}
	}

	/// Show or hide the pane. Returns the new visibility.
	pub fn toggle(&mut self) -> bool {
		self.visible = !self.visible;
		log::debug!("log pane {}", if self.visible { "shown" } else { "hidden" });
		self.visible
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Scroll the pane with Shift+PageUp / Shift+PageDown. Returns `true`
	/// when the key was consumed.
	pub fn handle_key(&self, key: KeyEvent) -> bool {
		if !self.visible || !key.modifiers.contains(KeyModifiers::SHIFT) {
			return false;
		}
		let event = match key.code {
			KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
			KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
			KeyCode::End => TuiWidgetEvent::EscapeKey,
			_ => return false,
		};
		self.state.transition(event);
		true
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}
		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.borders(Borders::TOP)
					.border_style(theme.border)
					.title(" Log (F2) "),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.style(theme.muted_style())
			.state(&self.state);
		frame.render_widget(widget, area);
	}
}
