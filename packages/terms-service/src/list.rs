use std::collections::HashSet;

use serde::Serialize;

use crate::{Error, MatchMode, Page, Requester, Result, Term, TermsService};
use terms_config::SearchMode;
use terms_domain::{dedup_tag_names, paginate, require_all_tags, visible_subset};

#[derive(Clone, Debug)]
pub struct ListRequest {
	pub query: Option<String>,
	pub tags: Vec<String>,
	pub requester: Requester,
	pub page: u32,
	pub page_size: Option<u32>,
}
impl ListRequest {
	pub fn new(requester: Requester) -> Self {
		Self { query: None, tags: Vec::new(), requester, page: 1, page_size: None }
	}
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TermItem {
	pub id: i64,
	pub term: String,
	pub definition: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
}
impl TermItem {
	pub(crate) fn from_term(term: Term, include_tags: bool) -> Self {
		Self {
			id: term.id,
			term: term.term,
			definition: term.definition,
			tags: include_tags.then(|| term.tags.into_iter().collect()),
		}
	}
}

impl TermsService {
	/// Visibility, then tag intersection, then ranking. Later stages never widen the set.
	pub async fn search(&self, req: &ListRequest) -> Result<Vec<Term>> {
		let mut terms = self.store.terms().await.inspect_err(log_upstream_failure)?;

		terms.sort_by_key(|term| term.id);

		let total = terms.len();
		let visible = visible_subset(terms, &req.requester);
		let visible_count = visible.len();
		let required_tags =
			if self.tags_enabled() { dedup_tag_names(req.tags.as_slice()) } else { Vec::new() };
		let candidates = require_all_tags(visible, required_tags.as_slice());
		let candidate_count = candidates.len();
		let query = req.query.as_deref().map(str::trim).filter(|query| !query.is_empty());
		let Some(query) = query else {
			tracing::debug!(total, visible_count, candidate_count, "Listed terms without query.");

			return Ok(candidates);
		};
		let allowed: HashSet<i64> = candidates.iter().map(|term| term.id).collect();
		let ranked = match self.cfg.search.mode {
			SearchMode::Partial => self.index.search(query, candidates, MatchMode::Partial).await,
			SearchMode::Exact => self.index.search(query, candidates, MatchMode::Exact).await,
			SearchMode::Autocomplete => self.index.autocomplete(query, candidates).await,
		}
		.inspect_err(log_upstream_failure)?;
		let mut seen = HashSet::with_capacity(ranked.len());
		let results: Vec<Term> = ranked
			.into_iter()
			.filter(|term| allowed.contains(&term.id) && seen.insert(term.id))
			.collect();

		tracing::debug!(
			total,
			visible_count,
			candidate_count,
			matched = results.len(),
			tags = required_tags.len(),
			"Composed term query."
		);

		Ok(results)
	}

	pub async fn list(&self, req: ListRequest) -> Result<Page<TermItem>> {
		let terms = self.search(&req).await?;
		let page_size = req.page_size.unwrap_or(self.cfg.pagination.page_size);
		let include_tags = self.tags_enabled();
		let page = paginate(terms, req.page, page_size, self.cfg.pagination.max_page_size);

		Ok(page.map(|term| TermItem::from_term(term, include_tags)))
	}
}

pub(crate) fn log_upstream_failure(err: &Error) {
	tracing::warn!(error = %err, "Upstream term source failed.");
}
