use anyhow::Result;
use country_picker_data::{Country, CountryService};

use crate::components::{FilterRenderer, TriggerRenderer};
use crate::config::UiLabels;
use crate::picker::{CountryPicker, LifecycleCallback, PickerProps, SelectCallback};
use crate::style::{StyleConfig, Theme};
use crate::{App, PickerOutcome};

/// A small builder for configuring and running the interactive picker.
pub struct CountryPickerUi {
	props: PickerProps,
	service: CountryService,
	labels: UiLabels,
	style: StyleConfig,
	trigger_renderer: Option<Box<dyn TriggerRenderer>>,
	filter_renderer: Option<Box<dyn FilterRenderer>>,
	on_select: Option<SelectCallback>,
	on_open: Option<LifecycleCallback>,
	on_close: Option<LifecycleCallback>,
}

impl CountryPickerUi {
	pub fn new(props: PickerProps) -> Self {
		Self {
			props,
			service: CountryService::default(),
			labels: UiLabels::default(),
			style: StyleConfig::default(),
			trigger_renderer: None,
			filter_renderer: None,
			on_select: None,
			on_open: None,
			on_close: None,
		}
	}

	/// Read countries from `service` instead of the built-in dataset.
	pub fn with_service(mut self, service: CountryService) -> Self {
		self.service = service;
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.labels.title = title.into();
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.labels.placeholder = placeholder.into();
		self
	}

	pub fn with_style(mut self, style: StyleConfig) -> Self {
		self.style = style;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.style.theme = theme;
		self
	}

	/// Use the named theme; unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match crate::style::by_name(name) {
			Some(theme) => self.style.theme = theme,
			None => log::warn!("unknown theme `{name}`"),
		}
		self
	}

	pub fn with_trigger_renderer(mut self, renderer: impl TriggerRenderer + 'static) -> Self {
		self.trigger_renderer = Some(Box::new(renderer));
		self
	}

	pub fn with_filter_renderer(mut self, renderer: impl FilterRenderer + 'static) -> Self {
		self.filter_renderer = Some(Box::new(renderer));
		self
	}

	pub fn on_select(mut self, callback: impl FnMut(&Country) + 'static) -> Self {
		self.on_select = Some(Box::new(callback));
		self
	}

	pub fn on_open(mut self, callback: impl FnMut() + 'static) -> Self {
		self.on_open = Some(Box::new(callback));
		self
	}

	pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
		self.on_close = Some(Box::new(callback));
		self
	}

	/// Assemble the [`App`] without starting the terminal.
	pub fn build(self) -> App {
		let mut on_select = self.on_select;
		let mut picker = CountryPicker::with_service(self.service, self.props, move |country: &Country| {
			if let Some(callback) = on_select.as_mut() {
				callback(country);
			}
		});
		if let Some(on_open) = self.on_open {
			picker = picker.on_open(on_open);
		}
		if let Some(on_close) = self.on_close {
			picker = picker.on_close(on_close);
		}

		let mut app = App::new(picker);
		app.set_labels(self.labels);
		app.set_style(self.style);
		if let Some(renderer) = self.trigger_renderer {
			app.set_trigger_renderer(renderer);
		}
		if let Some(renderer) = self.filter_renderer {
			app.set_filter_renderer(renderer);
		}
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<PickerOutcome> {
		self.build().run()
	}
}
