use std::collections::BTreeSet;

use crate::Term;

/// Trims, drops blanks and removes duplicates while keeping first-seen order.
pub fn dedup_tag_names<S>(names: &[S]) -> Vec<String>
where
	S: AsRef<str>,
{
	let mut seen = BTreeSet::new();
	let mut out = Vec::with_capacity(names.len());

	for name in names {
		let trimmed = name.as_ref().trim();

		if trimmed.is_empty() {
			continue;
		}
		if seen.insert(trimmed) {
			out.push(trimmed.to_string());
		}
	}

	out
}

/// Keeps terms carrying every requested tag. An empty request keeps everything.
pub fn require_all_tags<S>(terms: Vec<Term>, tag_names: &[S]) -> Vec<Term>
where
	S: AsRef<str>,
{
	let required = dedup_tag_names(tag_names);

	if required.is_empty() {
		return terms;
	}

	terms
		.into_iter()
		.filter(|term| {
			let carried = required.iter().filter(|name| term.has_tag(name)).count();

			carried == required.len()
		})
		.collect()
}
