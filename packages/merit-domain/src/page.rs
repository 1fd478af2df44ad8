use serde::Serialize;

/// The row window for one result page. Construction coerces out-of-range
/// input instead of rejecting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
	pub page: u32,
	pub page_size: u32,
}
impl PageWindow {
	pub fn new(page: i64, page_size: i64, max_page_size: u32) -> Self {
		let page = page.clamp(1, i64::from(u32::MAX)) as u32;
		let page_size = page_size.clamp(1, i64::from(max_page_size.max(1))) as u32;

		Self { page, page_size }
	}

	pub fn offset(self) -> i64 {
		i64::from(self.page - 1) * i64::from(self.page_size)
	}

	pub fn limit(self) -> i64 {
		i64::from(self.page_size)
	}
}

/// Page metadata reported alongside the rows. A page past the end of the
/// result set is not an error; the caller still gets accurate totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
	pub total: u64,
	pub page: u32,
	pub page_size: u32,
	pub total_pages: u64,
}
impl PageMeta {
	pub fn new(total: u64, window: PageWindow) -> Self {
		Self {
			total,
			page: window.page,
			page_size: window.page_size,
			total_pages: total.div_ceil(u64::from(window.page_size)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offset_is_page_minus_one_times_size() {
		let window = PageWindow::new(3, 10, 100);

		assert_eq!(window.offset(), 20);
		assert_eq!(window.limit(), 10);
	}

	#[test]
	fn coerces_invalid_page_and_size() {
		let window = PageWindow::new(0, -5, 100);

		assert_eq!(window.page, 1);
		assert_eq!(window.page_size, 1);
		assert_eq!(window.offset(), 0);
	}

	#[test]
	fn caps_page_size_at_maximum() {
		let window = PageWindow::new(1, 10_000, 100);

		assert_eq!(window.page_size, 100);
	}

	#[test]
	fn total_pages_is_ceiling() {
		let window = PageWindow::new(1, 10, 100);

		assert_eq!(PageMeta::new(0, window).total_pages, 0);
		assert_eq!(PageMeta::new(1, window).total_pages, 1);
		assert_eq!(PageMeta::new(10, window).total_pages, 1);
		assert_eq!(PageMeta::new(11, window).total_pages, 2);
	}

	#[test]
	fn metadata_survives_out_of_range_page() {
		let window = PageWindow::new(999, 10, 100);
		let meta = PageMeta::new(10, window);

		assert_eq!(meta.page, 999);
		assert_eq!(meta.total, 10);
		assert_eq!(meta.total_pages, 1);
	}
}
