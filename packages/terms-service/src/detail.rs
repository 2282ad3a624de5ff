use crate::{Error, Requester, Result, TermItem, TermsService, list::log_upstream_failure};
use terms_domain::is_visible;

impl TermsService {
	/// One term by id. Terms the requester may not see are reported as missing.
	pub async fn term(&self, id: i64, requester: &Requester) -> Result<TermItem> {
		let term = self.store.term(id).await.inspect_err(log_upstream_failure)?;

		match term {
			Some(term) if is_visible(&term, requester) =>
				Ok(TermItem::from_term(term, self.tags_enabled())),
			_ => Err(Error::NotFound { message: format!("term {id}") }),
		}
	}
}
