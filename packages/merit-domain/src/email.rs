use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub fn is_valid_email(raw: &str) -> bool {
	Regex::new(EMAIL_PATTERN).map(|re| re.is_match(raw)).unwrap_or(false)
}
