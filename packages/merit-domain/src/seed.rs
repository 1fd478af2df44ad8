/// Deterministic hash of a caller-provided seed. Every place that previously
/// would have reached for randomness derives from this value instead, so the
/// same seed always produces the same fallback output.
pub fn seed_hash(seed: &str) -> u64 {
	let digest = blake3::hash(seed.as_bytes());
	let bytes = digest.as_bytes();

	u64::from_le_bytes([
		bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
	])
}

/// Picks one option by hash. `options` must be non-empty.
pub fn pick<'a>(hash: u64, options: &'a [&'a str]) -> &'a str {
	options[(hash % options.len() as u64) as usize]
}

/// Reduces the hash into `0..modulo`. A zero modulo yields zero.
pub fn bounded(hash: u64, modulo: u64) -> u64 {
	if modulo == 0 { 0 } else { hash % modulo }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_seed_same_hash() {
		assert_eq!(seed_hash("EN23156022"), seed_hash("EN23156022"));
		assert_ne!(seed_hash("EN23156022"), seed_hash("EN23156023"));
	}

	#[test]
	fn pick_is_stable() {
		let options = ["a", "b", "c"];
		let hash = seed_hash("stable");

		assert_eq!(pick(hash, &options), pick(hash, &options));
	}

	#[test]
	fn bounded_handles_zero_modulo() {
		assert_eq!(bounded(42, 0), 0);
		assert_eq!(bounded(42, 10), 2);
	}
}
