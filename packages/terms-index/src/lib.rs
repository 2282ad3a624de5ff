//! In-process term matching used when no external full-text engine is wired in.
//!
//! Queries are split into lowercase word tokens and matched OR-wise against three fields. A term
//! ranks by how many tokens hit its name, then its definition, then its tag names; terms with equal
//! hits keep their candidate order.

pub mod text;

use std::cmp::Ordering;

use terms_domain::Term;

use crate::text::{FieldWords, tokenize_query};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchMode {
	/// A token must equal a whole word.
	Exact,
	/// A token may be the prefix of a word.
	Partial,
}
impl MatchMode {
	fn word_matches(self, word: &str, token: &str) -> bool {
		match self {
			Self::Exact => word == token,
			Self::Partial => word.starts_with(token),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldHits {
	pub name: usize,
	pub definition: usize,
	pub tags: usize,
}
impl FieldHits {
	pub fn any(&self) -> bool {
		self.name + self.definition + self.tags > 0
	}

	fn rank(&self, other: &Self) -> Ordering {
		other
			.name
			.cmp(&self.name)
			.then_with(|| other.definition.cmp(&self.definition))
			.then_with(|| other.tags.cmp(&self.tags))
	}
}

pub fn field_hits(term: &Term, tokens: &[String], mode: MatchMode) -> FieldHits {
	let fields = FieldWords::from_term(term);
	let hits = |words: &[String]| {
		tokens
			.iter()
			.filter(|token| words.iter().any(|word| mode.word_matches(word, token)))
			.count()
	};

	FieldHits {
		name: hits(&fields.name),
		definition: hits(&fields.definition),
		tags: hits(&fields.tags),
	}
}

/// Returns the candidates matching any query token, best first.
pub fn search(query: &str, candidates: Vec<Term>, mode: MatchMode) -> Vec<Term> {
	let tokens = tokenize_query(query);

	if tokens.is_empty() {
		return Vec::new();
	}

	let mut scored: Vec<(FieldHits, Term)> = candidates
		.into_iter()
		.filter_map(|term| {
			let hits = field_hits(&term, &tokens, mode);

			hits.any().then_some((hits, term))
		})
		.collect();

	scored.sort_by(|(a, _), (b, _)| a.rank(b));

	scored.into_iter().map(|(_, term)| term).collect()
}

/// Type-ahead matching on term names: every token must prefix some word of the name.
pub fn autocomplete(query: &str, candidates: Vec<Term>) -> Vec<Term> {
	let tokens = tokenize_query(query);

	if tokens.is_empty() {
		return Vec::new();
	}

	candidates
		.into_iter()
		.filter(|term| {
			let words = text::words(&term.term);

			tokens.iter().all(|token| words.iter().any(|word| word.starts_with(token.as_str())))
		})
		.collect()
}
