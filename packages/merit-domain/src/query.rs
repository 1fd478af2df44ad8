/// Minimum length for a free-text term to get its own name predicate. Shorter
/// terms would match far too broadly.
pub const MIN_TERM_CHARS: usize = 3;

/// Columns covered by the standard full-string search.
const SEARCH_COLUMNS: [&str; 5] = ["full_name", "application_id", "branch", "college", "category"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
	#[default]
	SrNo,
	MeritNo,
	MhtCetScore,
	ApplicationId,
	FullName,
	Gender,
	Category,
	SeatType,
	Branch,
	College,
	City,
	SeatLevel,
	Status,
	Admitted,
}
impl SortField {
	/// Unrecognized input falls back to the default sort field rather than
	/// erroring; the allow-list is what reaches the store.
	pub fn parse(raw: &str) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"sr_no" => Self::SrNo,
			"merit_no" => Self::MeritNo,
			"mht_cet_score" => Self::MhtCetScore,
			"application_id" => Self::ApplicationId,
			"full_name" => Self::FullName,
			"gender" => Self::Gender,
			"category" => Self::Category,
			"seat_type" => Self::SeatType,
			"branch" => Self::Branch,
			"college" => Self::College,
			"city" => Self::City,
			"seat_level" => Self::SeatLevel,
			"status" => Self::Status,
			"admitted" => Self::Admitted,
			_ => Self::default(),
		}
	}

	pub fn as_column(self) -> &'static str {
		match self {
			Self::SrNo => "sr_no",
			Self::MeritNo => "merit_no",
			Self::MhtCetScore => "mht_cet_score",
			Self::ApplicationId => "application_id",
			Self::FullName => "full_name",
			Self::Gender => "gender",
			Self::Category => "category",
			Self::SeatType => "seat_type",
			Self::Branch => "branch",
			Self::College => "college",
			Self::City => "city",
			Self::SeatLevel => "seat_level",
			Self::Status => "status",
			Self::Admitted => "admitted",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}
impl SortDirection {
	/// Only the exact token `desc` selects descending; anything else is
	/// ascending.
	pub fn parse(raw: &str) -> Self {
		if raw.trim().eq_ignore_ascii_case("desc") { Self::Descending } else { Self::Ascending }
	}

	pub fn as_sql(self) -> &'static str {
		match self {
			Self::Ascending => "ASC",
			Self::Descending => "DESC",
		}
	}
}

/// A case-insensitive contains-substring condition on a single column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainsPredicate {
	pub column: &'static str,
	pub needle: String,
}

/// Disjunction of contains predicates; the store matches a row when any
/// predicate holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFilter {
	pub predicates: Vec<ContainsPredicate>,
}

/// Builds the filter for a free-text search, or `None` when the input is
/// empty or whitespace (match all).
///
/// Each standard column gets a predicate for the whole trimmed input. When
/// the input has multiple whitespace-separated terms, every term of at least
/// [`MIN_TERM_CHARS`] characters additionally gets a name predicate of its
/// own, so "Kumar Abhishek" matches a row named "Abhishek Kumar".
pub fn build_filter(free_text: &str) -> Option<SearchFilter> {
	let trimmed = free_text.trim();

	if trimmed.is_empty() {
		return None;
	}

	let mut predicates = Vec::with_capacity(SEARCH_COLUMNS.len());

	for column in SEARCH_COLUMNS {
		predicates.push(ContainsPredicate { column, needle: trimmed.to_string() });
	}

	let terms: Vec<&str> = trimmed.split_whitespace().collect();

	if terms.len() > 1 {
		for term in terms {
			if term.chars().count() >= MIN_TERM_CHARS {
				predicates.push(ContainsPredicate { column: "full_name", needle: term.to_string() });
			}
		}
	}

	if predicates.is_empty() {
		return None;
	}

	Some(SearchFilter { predicates })
}
