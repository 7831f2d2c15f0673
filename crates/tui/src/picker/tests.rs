use std::cell::RefCell;
use std::rc::Rc;

use country_picker_data::{CountryScope, Flag, Region};

use super::*;

fn code(value: &str) -> CountryCode {
	CountryCode::parse(value).unwrap()
}

fn codes(countries: &[&Country]) -> Vec<String> {
	countries.iter().map(|c| c.code().to_string()).collect()
}

/// Picker recording every `on_select` call.
fn recording_picker(props: PickerProps) -> (CountryPicker, Rc<RefCell<Vec<CountryCode>>>) {
	let selected = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&selected);
	let picker = CountryPicker::new(props, move |country: &Country| {
		sink.borrow_mut().push(country.code());
	});
	(picker, selected)
}

fn counter() -> (Rc<RefCell<usize>>, impl FnMut() + 'static) {
	let count = Rc::new(RefCell::new(0));
	let handle = Rc::clone(&count);
	(count, move || *handle.borrow_mut() += 1)
}

#[test]
fn filtering_then_selecting_germany_from_france() {
	let props = PickerProps {
		with_filter: true,
		..PickerProps::new().with_country_code(code("FR"))
	};
	let (mut picker, selected) = recording_picker(props);
	assert_eq!(picker.trigger_content().unwrap().label(), "🇫🇷");

	assert!(picker.open());
	assert!(picker.set_filter("Germ"));
	assert_eq!(codes(&picker.filtered_countries()), ["DE"]);

	let country = picker.select(code("DE")).unwrap();
	assert_eq!(country.name(), "Germany");
	assert_eq!(*selected.borrow(), [code("DE")]);
	assert!(!picker.is_open());
	assert_eq!(picker.filter_text(), "");
	assert_eq!(picker.country_code(), Some(code("DE")));
	assert_eq!(picker.trigger_content().unwrap().label(), "🇩🇪");
}

#[test]
fn select_fires_before_close() {
	let order = Rc::new(RefCell::new(Vec::new()));
	let on_select_order = Rc::clone(&order);
	let on_close_order = Rc::clone(&order);
	let mut picker = CountryPicker::new(PickerProps::new(), move |_: &Country| {
		on_select_order.borrow_mut().push("select");
	})
	.on_close(move || on_close_order.borrow_mut().push("close"));

	picker.open();
	picker.select(code("JP"));
	assert_eq!(*order.borrow(), ["select", "close"]);
}

#[test]
fn open_is_idempotent() {
	let (opens, on_open) = counter();
	let (mut picker, _) = recording_picker(PickerProps::new());
	picker = picker.on_open(on_open);

	assert!(picker.open());
	assert!(!picker.open());
	assert_eq!(*opens.borrow(), 1);
}

#[test]
fn open_keeps_filter_text() {
	let props = PickerProps {
		visible: true,
		..PickerProps::new()
	};
	let (mut picker, _) = recording_picker(props);
	assert!(picker.is_open());
	picker.set_filter("fra");
	assert!(!picker.open());
	assert_eq!(picker.filter_text(), "fra");
}

#[test]
fn close_resets_filter_and_keeps_countries() {
	let (closes, on_close) = counter();
	let (picker, _) = recording_picker(PickerProps::new());
	let mut picker = picker.on_close(on_close);
	picker.open();
	picker.set_filter("ger");
	picker.focus_filter();
	let before: Vec<_> = picker.visible_countries().to_vec();

	assert!(picker.close());
	assert_eq!(picker.filter_text(), "");
	assert!(!picker.filter_focused());
	assert_eq!(picker.visible_countries(), before.as_slice());
	assert_eq!(*closes.borrow(), 1);

	assert!(!picker.close());
	assert_eq!(*closes.borrow(), 1);
}

#[test]
fn missing_lifecycle_callbacks_are_skipped() {
	let (mut picker, _) = recording_picker(PickerProps::new());
	assert!(picker.open());
	assert!(picker.close());
}

#[test]
fn hidden_list_ignores_filter_and_selection() {
	let (mut picker, selected) = recording_picker(PickerProps::new());
	assert!(!picker.set_filter("ger"));
	assert_eq!(picker.filter_text(), "");
	assert!(picker.select(code("DE")).is_none());
	assert!(selected.borrow().is_empty());
}

#[test]
fn unknown_codes_are_not_selectable() {
	let (mut picker, selected) = recording_picker(PickerProps::new());
	picker.open();
	assert!(picker.select(code("ZZ")).is_none());
	assert!(selected.borrow().is_empty());
	assert!(picker.is_open());
}

#[test]
fn countries_hidden_by_the_filter_are_not_selectable() {
	let props = PickerProps {
		with_filter: true,
		..PickerProps::new().with_country_code(code("DE"))
	};
	let (mut picker, selected) = recording_picker(props);
	picker.open();
	picker.set_filter("Germ");

	assert!(picker.select(code("FR")).is_none());
	assert!(selected.borrow().is_empty());
	assert!(picker.is_open());
	assert_eq!(picker.filter_text(), "Germ");
	assert_eq!(picker.country_code(), Some(code("DE")));
}

#[test]
fn inline_picker_is_always_listed() {
	let props = PickerProps {
		with_modal: false,
		..PickerProps::new().with_country_code(code("FR"))
	};
	let (closes, on_close) = counter();
	let (picker, selected) = recording_picker(props);
	let mut picker = picker.on_close(on_close);

	assert!(!picker.is_open());
	assert!(picker.list_visible());
	assert!(picker.trigger_content().is_none());

	assert!(picker.set_filter("ital"));
	assert!(picker.close());
	assert_eq!(picker.filter_text(), "");
	assert_eq!(*closes.borrow(), 1);

	assert!(picker.select(code("IT")).is_some());
	assert_eq!(*selected.borrow(), [code("IT")]);
	assert!(picker.list_visible());
}

#[test]
fn flag_style_changes_flags_but_not_selection() {
	let (mut picker, selected) = recording_picker(PickerProps::new().with_country_code(code("FR")));
	assert!(matches!(picker.visible_countries()[0].flag(), Flag::Emoji(_)));

	assert!(picker.set_flag_style(FlagStyle::Asset));
	assert!(!picker.set_flag_style(FlagStyle::Asset));
	assert!(
		picker
			.visible_countries()
			.iter()
			.all(|country| matches!(country.flag(), Flag::Asset(_)))
	);
	assert_eq!(picker.country_code(), Some(code("FR")));
	assert!(selected.borrow().is_empty());
	assert_eq!(
		picker.trigger_content().unwrap().flag(),
		Some(&Flag::Asset("flags/fr.png".into()))
	);
}

#[test]
fn translation_change_resolves_names_and_keeps_filter() {
	let props = PickerProps {
		visible: true,
		..PickerProps::new()
	};
	let (mut picker, _) = recording_picker(props);
	picker.set_filter("deutsch");
	assert!(picker.filtered_countries().is_empty());

	assert!(picker.set_translation(Translation::Deu));
	assert_eq!(picker.filter_text(), "deutsch");
	assert_eq!(codes(&picker.filtered_countries()), ["DE"]);
	assert!(!picker.set_translation(Translation::Deu));
}

#[test]
fn calling_code_matching_follows_the_column_toggle() {
	let props = PickerProps {
		visible: true,
		with_calling_code: true,
		..PickerProps::new()
	};
	let (mut picker, _) = recording_picker(props.clone());
	picker.set_filter("+358");
	let mut matched = codes(&picker.filtered_countries());
	matched.sort();
	assert_eq!(matched, ["AX", "FI"]);

	let (mut picker, _) = recording_picker(PickerProps {
		filter_calling_codes: Some(false),
		..props
	});
	picker.set_filter("+358");
	assert!(picker.filtered_countries().is_empty());
}

#[test]
fn alphabet_index_requires_toggle_and_empty_filter() {
	let (mut picker, _) = recording_picker(PickerProps {
		visible: true,
		..PickerProps::new()
	});
	assert!(picker.alphabet_index().is_none());

	let (mut alpha, _) = recording_picker(PickerProps {
		visible: true,
		with_alpha_filter: true,
		..PickerProps::new()
	});
	let index = alpha.alphabet_index().unwrap();
	assert_eq!(index.letters().next(), Some('A'));
	let g = index.get('G').unwrap();
	assert!(alpha.visible_countries()[g.position].name().starts_with('G'));

	alpha.set_filter("g");
	assert!(alpha.alphabet_index().is_none());
	picker.set_filter("g");
	assert!(picker.alphabet_index().is_none());
}

#[test]
fn scope_limits_offered_countries() {
	let props = PickerProps {
		visible: true,
		scope: CountryScope {
			region: Some(Region::Europe),
			..CountryScope::default()
		},
		..PickerProps::new()
	};
	let (mut picker, selected) = recording_picker(props);
	assert!(picker.select(code("JP")).is_none());
	assert!(picker.select(code("FR")).is_some());
	assert_eq!(*selected.borrow(), [code("FR")]);
}

#[test]
fn dispatch_routes_events() {
	let (mut picker, selected) = recording_picker(PickerProps::new().with_country_code(code("FR")));
	assert!(picker.dispatch(PickerEvent::Open).is_none());
	assert!(picker.is_open());

	picker.dispatch(PickerEvent::FilterFocused);
	assert!(picker.filter_focused());
	picker.dispatch(PickerEvent::FilterChanged("Germ".into()));
	picker.dispatch(PickerEvent::TranslationChanged(Translation::Ita));
	picker.dispatch(PickerEvent::FlagStyleChanged(FlagStyle::Asset));
	assert_eq!(picker.translation(), Translation::Ita);
	assert_eq!(picker.flag_style(), FlagStyle::Asset);
	// "Germania" still contains the filter.
	assert_eq!(codes(&picker.filtered_countries()), ["DE"]);

	picker.dispatch(PickerEvent::FilterBlurred);
	assert!(!picker.filter_focused());

	let chosen = picker.dispatch(PickerEvent::Select(code("DE"))).unwrap();
	assert_eq!(chosen.name(), "Germania");
	assert_eq!(*selected.borrow(), [code("DE")]);

	picker.dispatch(PickerEvent::Open);
	picker.dispatch(PickerEvent::Close);
	assert!(!picker.is_open());
}
