use crate::{Requester, Term};

pub fn is_visible(term: &Term, requester: &Requester) -> bool {
	term.live || requester.elevated
}

/// Drops non-live terms unless the requester is elevated. Runs before every other filter.
pub fn visible_subset(terms: Vec<Term>, requester: &Requester) -> Vec<Term> {
	if requester.elevated {
		return terms;
	}

	terms.into_iter().filter(|term| term.live).collect()
}
