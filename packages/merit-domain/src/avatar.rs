use crate::seed;

const CELL: usize = 20;
const GRID: usize = 5;

/// Renders a deterministic identicon for the seed: a 5x5 mirrored cell grid
/// with a digest-derived foreground color. Same seed, same markup.
pub fn render_svg(seed_text: &str) -> String {
	let digest = blake3::hash(seed_text.as_bytes());
	let bytes = digest.as_bytes();
	let color = format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2]);
	let size = CELL * GRID;
	let mut svg = format!(
		r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}"><rect width="{size}" height="{size}" fill="#f2f1ed"/>"##,
	);

	for row in 0..GRID {
		for col in 0..GRID {
			// Mirror the right-hand columns so the figure is symmetric.
			let source_col = col.min(GRID - 1 - col);
			let bit_index = row * 3 + source_col;
			let byte = bytes[3 + bit_index / 8];

			if byte >> (bit_index % 8) & 1 == 1 {
				let x = col * CELL;
				let y = row * CELL;

				svg.push_str(&format!(
					r#"<rect x="{x}" y="{y}" width="{CELL}" height="{CELL}" fill="{color}"/>"#,
				));
			}
		}
	}

	svg.push_str("</svg>");

	svg
}

pub fn svg_to_data_url(svg: &str) -> String {
	format!("data:image/svg+xml;utf8,{}", percent_encode(svg))
}

/// Substitute image URL for when local generation produces nothing usable.
/// The background color derives from the seed so the substitute is stable.
pub fn substitute_image_url(seed_text: &str, size: u32) -> String {
	let hash = seed::seed_hash(seed_text);

	format!(
		"https://ui-avatars.com/api/?name={}&background={:06x}&color=fff&size={size}&format=png",
		percent_encode(seed_text),
		seed::bounded(hash, 0x1_000_000),
	)
}

/// Substitute URL for when the remote avatar provider is unavailable; the
/// style choice derives from the seed.
pub fn substitute_avatar_url(seed_text: &str, size: u32) -> String {
	const STYLES: [&str; 5] = ["micah", "adventurer", "avataaars", "bottts", "fun-emoji"];

	let hash = seed::seed_hash(seed_text);
	let style = seed::pick(hash, &STYLES);

	format!("https://avatars.dicebear.com/api/{style}/{}.svg?size={size}", percent_encode(seed_text))
}

fn percent_encode(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());

	for byte in raw.bytes() {
		match byte {
			b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
				out.push(byte as char);
			},
			_ => out.push_str(&format!("%{byte:02X}")),
		}
	}

	out
}
