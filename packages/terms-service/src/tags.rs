use crate::{Error, Requester, Result, TagPage, TermsService, list::log_upstream_failure};
use terms_domain::{PermissionGate, aggregate_tags};

impl TermsService {
	/// Tag usage over live terms, 50 per page. Permission is checked before any term is read.
	pub async fn tag_report(&self, requester: &Requester, page: u32) -> Result<TagPage> {
		if !self.tags_enabled() {
			return Err(Error::FeatureDisabled);
		}

		let gate = PermissionGate::tag_report();

		if !gate.allow(requester) {
			tracing::warn!(authenticated = requester.authenticated, "Rejected tag report request.");

			return Err(Error::PermissionDenied { message: gate.message().to_string() });
		}

		let terms = self.store.terms().await.inspect_err(log_upstream_failure)?;
		let report = aggregate_tags(&terms, page);

		tracing::debug!(
			page,
			tags = report.tags.len(),
			has_more = report.has_more,
			"Built tag report."
		);

		Ok(report)
	}
}
