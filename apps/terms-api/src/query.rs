//! Query-string handling for the listing endpoints.
//!
//! Parameters are read leniently: repeated `tags` accumulate, other repeated keys keep the last
//! value, and unusable `page`/`page_size` values fall back instead of failing the request.

use axum::http::{HeaderMap, Uri, header};
use url::{Url, form_urlencoded};

use terms_service::{ListRequest, Page, Requester, parse_page_number};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListParams {
	pub q: Option<String>,
	pub tags: Vec<String>,
	pub page: u32,
	pub page_size: Option<u32>,
}
impl ListParams {
	pub fn parse(raw: Option<&str>) -> Self {
		let mut q = None;
		let mut tags = Vec::new();
		let mut page = None;
		let mut page_size = None;

		for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
			match key.as_ref() {
				"q" => q = Some(value.into_owned()),
				"tags" => tags.push(value.into_owned()),
				"page" => page = Some(value.into_owned()),
				"page_size" => page_size = Some(value.into_owned()),
				_ => {},
			}
		}

		Self {
			q,
			tags,
			page: parse_page_number(page.as_deref()),
			page_size: page_size
				.and_then(|value| value.trim().parse::<u32>().ok())
				.filter(|value| *value >= 1),
		}
	}

	pub fn into_request(self, requester: Requester) -> ListRequest {
		ListRequest {
			query: self.q,
			tags: self.tags,
			requester,
			page: self.page,
			page_size: self.page_size,
		}
	}
}

/// `page` alone, for the tag report.
pub fn page_param(raw: Option<&str>) -> u32 {
	let page = form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
		.filter(|(key, _)| key == "page")
		.map(|(_, value)| value.into_owned())
		.last();

	parse_page_number(page.as_deref())
}

/// Absolute links to the neighbouring pages, keeping every other query parameter.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PageLinks {
	pub next: Option<String>,
	pub previous: Option<String>,
}
impl PageLinks {
	pub fn for_page<T>(page: &Page<T>, headers: &HeaderMap, uri: &Uri) -> Self {
		let Some(base) = request_url(headers, uri) else { return Self::default() };
		let next = page.has_next.then(|| with_page(&base, page.current_page.saturating_add(1)));
		let previous = page.has_previous.then(|| {
			// Page numbers past the end still link back to the last real page.
			let target = page.current_page.saturating_sub(1).min(page.total_pages.max(1));

			with_page(&base, target)
		});

		Self { next, previous }
	}
}

fn request_url(headers: &HeaderMap, uri: &Uri) -> Option<Url> {
	let host = headers
		.get(header::HOST)
		.and_then(|value| value.to_str().ok())
		.filter(|value| !value.is_empty())
		.or_else(|| uri.authority().map(|authority| authority.as_str()))
		.unwrap_or("localhost");
	let scheme = headers
		.get("x-forwarded-proto")
		.and_then(|value| value.to_str().ok())
		.filter(|value| matches!(*value, "http" | "https"))
		.or_else(|| uri.scheme_str())
		.unwrap_or("http");
	let path_and_query = uri.path_and_query().map(|value| value.as_str()).unwrap_or("/");

	Url::parse(&format!("{scheme}://{host}{path_and_query}")).ok()
}

/// Page 1 links drop the parameter entirely.
fn with_page(base: &Url, page: u32) -> String {
	let mut url = base.clone();
	let kept: Vec<(String, String)> = base
		.query_pairs()
		.filter(|(key, _)| key != "page")
		.map(|(key, value)| (key.into_owned(), value.into_owned()))
		.collect();

	if kept.is_empty() && page <= 1 {
		url.set_query(None);

		return url.to_string();
	}

	{
		let mut pairs = url.query_pairs_mut();

		pairs.clear();
		pairs.extend_pairs(kept.iter());

		if page > 1 {
			pairs.append_pair("page", &page.to_string());
		}
	}

	url.to_string()
}
