use anyhow::Result;
use country_picker::{Country, PickerOutcome};
use serde_json::{Value, json};

/// One tab-separated line: code, name, calling code and currency.
pub(crate) fn format_country_line(country: &Country) -> String {
	let calling = country
		.calling_code()
		.map(|code| format!("+{code}"))
		.unwrap_or_default();
	format!(
		"{}\t{}\t{}\t{}",
		country.code(),
		country.name(),
		calling,
		country.currency().unwrap_or_default()
	)
}

/// Print a plain-text representation of the picker outcome.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
	match (&outcome.country, outcome.accepted) {
		(Some(country), true) => println!("{}", format_country_line(country)),
		_ => println!("Selection cancelled"),
	}
}

fn country_json(country: &Country) -> Value {
	json!({
		"code": country.code(),
		"name": country.name(),
		"calling_code": country.calling_code(),
		"currency": country.currency(),
		"flag": country.flag(),
		"region": country.region().map(|region| region.as_str()),
		"subregion": country.subregion(),
	})
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
	let country = match &outcome.country {
		Some(country) if outcome.accepted => country_json(country),
		_ => Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"country": country,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Print every offered country, one per line or as a JSON array.
pub(crate) fn print_countries(countries: &[Country], json: bool) -> Result<()> {
	if json {
		let values: Vec<Value> = countries.iter().map(country_json).collect();
		println!("{}", serde_json::to_string_pretty(&values)?);
	} else {
		for country in countries {
			println!("{}", format_country_line(country));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use country_picker::{CountryCode, CountryService, FlagStyle, Translation};

	use super::*;

	fn country(code: &str, style: FlagStyle) -> Country {
		CountryService::default()
			.country(CountryCode::parse(code).unwrap(), style, Translation::Common)
			.unwrap()
	}

	#[test]
	fn plain_line_is_tab_separated() {
		let france = country("FR", FlagStyle::Emoji);
		assert_eq!(format_country_line(&france), "FR\tFrance\t+33\tEUR");
	}

	#[test]
	fn json_format_includes_country() {
		let outcome = PickerOutcome::accepted(country("DE", FlagStyle::Asset));

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["country"]["code"], "DE");
		assert_eq!(value["country"]["calling_code"], "49");
		assert_eq!(value["country"]["flag"]["type"], "asset");
		assert_eq!(value["country"]["flag"]["value"], "flags/de.png");
	}

	#[test]
	fn cancelled_outcome_has_null_country() {
		let json = format_outcome_json(&PickerOutcome::cancelled()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["country"].is_null());
	}
}
