use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use merit_domain::seed;

use crate::{Error, Result};

const AVATAR_TYPES: [&str; 2] = ["Body", "Head"];
const BODY_COLORS: [&str; 6] = ["Yellow", "Black", "Brown", "White", "Pink", "Nude"];
const FACE_TYPES: [&str; 2] = ["NORMAL", "FRECKLES"];
const MALE_HAIR_TYPES: [&str; 6] =
	["SEMI_BALD", "SHORT_AFRO", "CENTER_PART", "SIDE_PART", "CORNROWS", "BALD"];
const FEMALE_HAIR_TYPES: [&str; 2] = ["LONG_AFRO", "PONY_TAIL"];
const HAIR_COLORS: [&str; 7] = ["BLACK", "BLONDE", "BLUE", "BROWN", "ORANGE", "PINK", "WHITE"];
const BEARD_TYPES: [&str; 6] =
	["GOAT_PATCH", "GOATEE", "FORK", "CHIN_TRAP", "GARIBALDI", "NED_KELLY"];
const MUSTACHE_TYPES: [&str; 4] = ["CHEVRON", "WALRUS", "HANDLEBAR", "POIROT"];
const CLOTH_COLORS: [&str; 10] =
	["BLACK", "BLUE", "GRAY", "GREEN", "ORANGE", "PINK", "PURPLE", "RED", "WHITE", "YELLOW"];
const GLASSES_TYPES: [&str; 2] = ["ROUND", "CAT_EYE"];

/// Derives the full avatar parameter set from the seed hash. Everything the
/// upstream would otherwise randomize is pinned here so one seed always
/// produces one avatar.
pub fn derive_params(seed_text: &str, gender: &str, size: u32) -> Vec<(&'static str, String)> {
	let hash = seed::seed_hash(seed_text);
	let mut params: Vec<(&'static str, String)> = vec![
		("size", size.to_string()),
		("gender", gender.to_string()),
		("seed", seed_text.to_string()),
		("avatarType", seed::pick(hash, &AVATAR_TYPES).to_string()),
		("bodyColor", seed::pick(hash, &BODY_COLORS).to_string()),
		("faceType", seed::pick(hash, &FACE_TYPES).to_string()),
	];
	let hair_types: &[&str] =
		if gender == "Female" { &FEMALE_HAIR_TYPES } else { &MALE_HAIR_TYPES };

	params.push(("hairType", seed::pick(hash, hair_types).to_string()));
	params.push(("hairColor", seed::pick(hash, &HAIR_COLORS).to_string()));

	if gender == "Male" && hash % 3 == 0 {
		params.push(("beardType", seed::pick(hash, &BEARD_TYPES).to_string()));
		params.push(("beardColor", seed::pick(hash, &HAIR_COLORS).to_string()));
	}
	if gender == "Male" && hash % 4 == 0 {
		params.push(("mustacheType", seed::pick(hash, &MUSTACHE_TYPES).to_string()));
		params.push(("mustacheColor", seed::pick(hash, &HAIR_COLORS).to_string()));
	}

	params.push(("clothColor", seed::pick(hash, &CLOTH_COLORS).to_string()));

	if hash % 4 == 0 {
		params.push(("glassesType", seed::pick(hash, &GLASSES_TYPES).to_string()));
		params.push(("glassesColor", seed::pick(hash, &CLOTH_COLORS).to_string()));
	}

	params
}

pub async fn generate(
	cfg: &merit_config::AvatarProviderConfig,
	params: &[(&'static str, String)],
) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let res = client.get(url).query(params).send().await?;
	let status = res.status();

	if !status.is_success() {
		let body = res.text().await.unwrap_or_default();

		return Err(Error::Upstream { status: status.as_u16(), body });
	}

	let mut json: Value = res.json().await?;

	normalize_image_url(&mut json)?;

	Ok(json)
}

/// Some deployments answer with `url` instead of `imageUrl`; downstream code
/// only reads `imageUrl`.
fn normalize_image_url(json: &mut Value) -> Result<()> {
	if json.get("imageUrl").is_some() {
		return Ok(());
	}

	let Some(url) = json.get("url").cloned() else {
		return Err(Error::InvalidResponse {
			message: "Avatar response is missing imageUrl.".to_string(),
		});
	};

	if let Some(obj) = json.as_object_mut() {
		obj.insert("imageUrl".to_string(), url);
	}

	Ok(())
}
