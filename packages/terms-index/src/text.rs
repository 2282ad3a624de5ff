use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use terms_domain::Term;

pub(crate) struct FieldWords {
	pub(crate) name: Vec<String>,
	pub(crate) definition: Vec<String>,
	pub(crate) tags: Vec<String>,
}
impl FieldWords {
	pub(crate) fn from_term(term: &Term) -> Self {
		Self {
			name: words(&term.term),
			definition: words(&strip_markup(&term.definition)),
			tags: term.tags.iter().flat_map(|tag| words(tag)).collect(),
		}
	}
}

pub fn words(text: &str) -> Vec<String> {
	text.unicode_words().map(|word| word.to_lowercase()).collect()
}

/// Lowercase word tokens of a free-text query, deduplicated in first-seen order.
pub fn tokenize_query(query: &str) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut out = Vec::new();

	for token in words(query) {
		if seen.insert(token.clone()) {
			out.push(token);
		}
	}

	out
}

/// Drops HTML tags, then decodes named and numeric character references in the remaining text.
pub fn strip_markup(html: &str) -> String {
	let mut out = String::with_capacity(html.len());
	let mut in_tag = false;

	for ch in html.chars() {
		match ch {
			'<' => in_tag = true,
			'>' if in_tag => {
				in_tag = false;

				out.push(' ');
			},
			_ if !in_tag => out.push(ch),
			_ => {},
		}
	}

	html_escape::decode_html_entities(&out).into_owned()
}
