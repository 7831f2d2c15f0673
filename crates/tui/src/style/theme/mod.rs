mod builtins;
mod types;

pub use builtins::{default_theme, parse_color};
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the widget.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations().to_vec()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::registrations()
		.iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = builtins::registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use ratatui::style::Color;

	use super::*;

	#[test]
	fn builtin_names_are_sorted() {
		assert_eq!(names(), ["light", "slate", "solarized"]);
	}

	#[test]
	fn lookup_ignores_case_and_accepts_aliases() {
		let slate = by_name("slate").unwrap();
		assert_eq!(by_name("  SLATE "), Some(slate));
		assert_eq!(by_name("dark"), Some(slate));
		assert_eq!(by_name("solarized-dark"), by_name("Solarized"));
		assert!(by_name("nonexistent").is_none());
	}

	#[test]
	fn slate_is_the_default() {
		assert_eq!(Theme::default(), by_name("slate").unwrap());
		assert_ne!(Theme::default().row_highlight.bg, Some(Color::Reset));
	}
}
