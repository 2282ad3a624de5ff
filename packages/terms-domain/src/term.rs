use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const MAX_TERM_NAME_CHARS: usize = 25;

/// A glossary entry as held by the term store. Read-only to everything in this workspace.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Term {
	pub id: i64,
	pub term: String,
	/// Rendered rich text (HTML).
	pub definition: String,
	pub live: bool,
	#[serde(default)]
	pub tags: BTreeSet<String>,
}
impl Term {
	pub fn has_tag(&self, name: &str) -> bool {
		self.tags.contains(name)
	}

	pub fn name_fits(&self) -> bool {
		self.term.chars().count() <= MAX_TERM_NAME_CHARS
	}
}
