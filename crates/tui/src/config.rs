/// Text rendered around the picker widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title of the modal or inline panel.
	pub title: String,
	/// Placeholder shown in the empty filter input.
	pub placeholder: String,
	/// Message shown when no country matches the filter.
	pub empty_message: String,
	/// Hint rendered next to the trigger while the modal is closed.
	pub trigger_hint: String,
	/// Key hint rendered on the bottom border of the list.
	pub list_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Select a country".to_string(),
			placeholder: "Enter country name".to_string(),
			empty_message: "No countries".to_string(),
			trigger_hint: "Enter to choose, q to quit".to_string(),
			list_hint: "Esc close · Tab focus · Enter select".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the title, keeping the other labels.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Replace the filter placeholder, keeping the other labels.
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}
}
