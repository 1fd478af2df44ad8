use serde::Serialize;

use crate::seed;

const MALE_FIRST_NAMES: [&str; 16] = [
	"James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Liam", "Noah",
	"Oliver", "Elijah", "Thomas", "Benjamin", "Lucas", "Daniel",
];
const FEMALE_FIRST_NAMES: [&str; 16] = [
	"Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Susan", "Emma", "Olivia", "Ava",
	"Isabella", "Sophia", "Charlotte", "Mia", "Amelia", "Sarah", "Karen",
];
const LAST_NAMES: [&str; 16] = [
	"Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
	"Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Lee",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaName {
	pub first_name: String,
	pub last_name: String,
	pub full_name: String,
	pub email: String,
	pub gender: String,
}

/// Resolves the gender token; anything other than the two recognized values
/// is decided by the seed hash so the choice stays stable per seed.
pub fn resolve_gender(hash: u64, gender: Option<&str>) -> &'static str {
	match gender.map(str::trim) {
		Some(raw) if raw.eq_ignore_ascii_case("male") => "Male",
		Some(raw) if raw.eq_ignore_ascii_case("female") => "Female",
		_ =>
			if hash % 2 == 0 {
				"Male"
			} else {
				"Female"
			},
	}
}

/// Synthesizes a substitute person name when the name provider is down.
pub fn fallback_name(seed_text: &str, gender: Option<&str>) -> PersonaName {
	let hash = seed::seed_hash(seed_text);
	let gender = resolve_gender(hash, gender);
	let first_names =
		if gender == "Female" { &FEMALE_FIRST_NAMES } else { &MALE_FIRST_NAMES };
	let first_name = seed::pick(hash, first_names).to_string();
	let last_name = seed::pick(hash.rotate_right(16), &LAST_NAMES).to_string();
	let email = format!("{}.{}@example.com", first_name.to_lowercase(), last_name.to_lowercase());

	PersonaName {
		full_name: format!("{first_name} {last_name}"),
		first_name,
		last_name,
		email,
		gender: gender.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_seed_same_name() {
		assert_eq!(fallback_name("seed", None), fallback_name("seed", None));
	}

	#[test]
	fn gender_token_is_honored() {
		assert_eq!(fallback_name("seed", Some("Female")).gender, "Female");
		assert_eq!(fallback_name("seed", Some("male")).gender, "Male");
	}

	#[test]
	fn unknown_gender_is_seed_derived() {
		let from_none = fallback_name("seed", None).gender;
		let from_garbage = fallback_name("seed", Some("other")).gender;

		assert_eq!(from_none, from_garbage);
	}

	#[test]
	fn email_matches_name() {
		let persona = fallback_name("seed", Some("Male"));

		assert_eq!(
			persona.email,
			format!(
				"{}.{}@example.com",
				persona.first_name.to_lowercase(),
				persona.last_name.to_lowercase()
			)
		);
	}
}
