use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::Term;

pub const TAG_PAGE_SIZE: usize = 50;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TagCount {
	pub name: String,
	pub count: usize,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TagPage {
	pub tags: Vec<TagCount>,
	#[serde(rename = "hasMore")]
	pub has_more: bool,
}

/// Counts distinct live terms per tag, most used first, and returns one fixed-size page.
///
/// Counts are derived on every call. Ties sort by tag name so the order is stable.
pub fn aggregate_tags(terms: &[Term], page_number: u32) -> TagPage {
	let mut users: BTreeMap<&str, BTreeSet<i64>> = BTreeMap::new();

	for term in terms.iter().filter(|term| term.live) {
		for tag in &term.tags {
			users.entry(tag.as_str()).or_default().insert(term.id);
		}
	}

	let mut counts: Vec<TagCount> = users
		.into_iter()
		.map(|(name, ids)| TagCount { name: name.to_string(), count: ids.len() })
		.collect();

	counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

	let page_number = page_number.max(1) as usize;
	let start = (page_number - 1).saturating_mul(TAG_PAGE_SIZE);
	let end = start.saturating_add(TAG_PAGE_SIZE);
	let has_more = counts.len() > end;
	let tags = counts.into_iter().skip(start).take(TAG_PAGE_SIZE).collect();

	TagPage { tags, has_more }
}
