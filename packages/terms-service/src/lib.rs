pub mod detail;
pub mod list;
pub mod tags;

mod error;

pub use error::{Error, Result};
pub use list::{ListRequest, TermItem};
pub use terms_domain::{Page, Requester, TagCount, TagPage, Term, parse_page_number};
pub use terms_index::MatchMode;

use std::{future::Future, pin::Pin, sync::Arc};

use terms_config::Config;
use terms_storage::{db::Db, queries, snapshot::SnapshotStore};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read access to the term records. Writes happen elsewhere.
pub trait TermStore
where
	Self: Send + Sync,
{
	/// All terms, ascending by id.
	fn terms<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Term>>>;

	fn term<'a>(&'a self, id: i64) -> BoxFuture<'a, Result<Option<Term>>>;
}

/// Full-text capability over a caller-chosen candidate set.
///
/// Implementations must only return terms drawn from `candidates`.
pub trait SearchIndex
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		query: &'a str,
		candidates: Vec<Term>,
		mode: MatchMode,
	) -> BoxFuture<'a, Result<Vec<Term>>>;

	fn autocomplete<'a>(
		&'a self,
		query: &'a str,
		candidates: Vec<Term>,
	) -> BoxFuture<'a, Result<Vec<Term>>>;
}

pub struct TermsService {
	pub cfg: Config,
	pub store: Arc<dyn TermStore>,
	pub index: Arc<dyn SearchIndex>,
}
impl TermsService {
	pub fn new(cfg: Config, store: Arc<dyn TermStore>) -> Self {
		Self::with_index(cfg, store, Arc::new(InMemoryIndex))
	}

	pub fn with_index(cfg: Config, store: Arc<dyn TermStore>, index: Arc<dyn SearchIndex>) -> Self {
		Self { cfg, store, index }
	}

	pub fn tags_enabled(&self) -> bool {
		!self.cfg.terms.disable_tags
	}
}

/// Matches in process with `terms-index`.
pub struct InMemoryIndex;

impl SearchIndex for InMemoryIndex {
	fn search<'a>(
		&'a self,
		query: &'a str,
		candidates: Vec<Term>,
		mode: MatchMode,
	) -> BoxFuture<'a, Result<Vec<Term>>> {
		Box::pin(async move { Ok(terms_index::search(query, candidates, mode)) })
	}

	fn autocomplete<'a>(
		&'a self,
		query: &'a str,
		candidates: Vec<Term>,
	) -> BoxFuture<'a, Result<Vec<Term>>> {
		Box::pin(async move { Ok(terms_index::autocomplete(query, candidates)) })
	}
}

impl TermStore for Db {
	fn terms<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Term>>> {
		Box::pin(async move { Ok(queries::fetch_terms(&self.pool).await?) })
	}

	fn term<'a>(&'a self, id: i64) -> BoxFuture<'a, Result<Option<Term>>> {
		Box::pin(async move { Ok(queries::fetch_term(&self.pool, id).await?) })
	}
}

impl TermStore for SnapshotStore {
	fn terms<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Term>>> {
		let terms = SnapshotStore::terms(self).to_vec();

		Box::pin(async move { Ok(terms) })
	}

	fn term<'a>(&'a self, id: i64) -> BoxFuture<'a, Result<Option<Term>>> {
		let term = self.get(id).cloned();

		Box::pin(async move { Ok(term) })
	}
}
