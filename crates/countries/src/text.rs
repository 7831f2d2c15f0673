//! Text normalisation used for ordering and indexing country names.

/// Lowercase `value` and strip common Latin diacritics so that names such as
/// "Åland Islands" sort next to the other A entries.
#[must_use]
pub fn fold_key(value: &str) -> String {
	value.chars().flat_map(char::to_lowercase).map(fold_char).collect()
}

/// Uppercased, folded first letter of `value`.
#[must_use]
pub fn first_letter(value: &str) -> Option<char> {
	let first = value.chars().find(|ch| !ch.is_whitespace())?;
	let folded = first.to_lowercase().next().map(fold_char)?;
	folded.to_uppercase().next()
}

fn fold_char(ch: char) -> char {
	match ch {
		'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
		'ç' | 'č' | 'ć' => 'c',
		'è' | 'é' | 'ê' | 'ë' | 'ē' => 'e',
		'ì' | 'í' | 'î' | 'ï' => 'i',
		'ñ' | 'ń' => 'n',
		'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
		'ù' | 'ú' | 'û' | 'ü' => 'u',
		'ý' | 'ÿ' => 'y',
		'š' | 'ś' => 's',
		'ž' | 'ź' | 'ż' => 'z',
		other => other,
	}
}
