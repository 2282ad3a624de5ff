use serde::Serialize;

/// One slice of an ordered result list plus the numbers needed to navigate it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Page<T> {
	pub count: usize,
	pub total_pages: u32,
	pub current_page: u32,
	pub has_next: bool,
	pub has_previous: bool,
	pub results: Vec<T>,
}
impl<T> Page<T> {
	pub fn map<U, F>(self, f: F) -> Page<U>
	where
		F: FnMut(T) -> U,
	{
		Page {
			count: self.count,
			total_pages: self.total_pages,
			current_page: self.current_page,
			has_next: self.has_next,
			has_previous: self.has_previous,
			results: self.results.into_iter().map(f).collect(),
		}
	}
}

/// Slices `items` into 1-based pages.
///
/// Out-of-range page numbers are not errors: they produce a page with empty `results` and the
/// usual counts. `page_size` is clamped to `1..=max_page_size`.
pub fn paginate<T>(items: Vec<T>, page_number: u32, page_size: u32, max_page_size: u32) -> Page<T> {
	let page_size = page_size.clamp(1, max_page_size.max(1));
	let count = items.len();
	let total_pages = count.div_ceil(page_size as usize) as u32;
	let results = if page_number == 0 || page_number > total_pages {
		Vec::new()
	} else {
		let start = (page_number - 1) as usize * page_size as usize;

		items.into_iter().skip(start).take(page_size as usize).collect()
	};

	Page {
		count,
		total_pages,
		current_page: page_number,
		has_next: page_number < total_pages,
		has_previous: page_number > 1,
		results,
	}
}

/// Reads a raw `page` parameter. Missing, non-numeric and sub-1 values all mean page 1.
pub fn parse_page_number(raw: Option<&str>) -> u32 {
	raw.and_then(|value| value.trim().parse::<i64>().ok())
		.filter(|value| *value >= 1)
		.map(|value| value.min(u32::MAX as i64) as u32)
		.unwrap_or(1)
}
