use std::sync::Arc;

use terms_service::{TermStore, TermsService};
use terms_storage::{db::Db, snapshot::SnapshotStore};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<TermsService>,
}
impl AppState {
	pub async fn new(config: terms_config::Config) -> color_eyre::Result<Self> {
		let store: Arc<dyn TermStore> =
			match (config.storage.postgres.as_ref(), config.storage.snapshot.as_ref()) {
				(Some(postgres), _) => {
					let db = Db::connect(postgres).await?;

					db.ensure_schema().await?;

					Arc::new(db)
				},
				(None, Some(snapshot)) => Arc::new(SnapshotStore::load(&snapshot.path)?),
				(None, None) =>
					return Err(color_eyre::eyre::eyre!("No term storage is configured.")),
			};
		let service = TermsService::new(config, store);

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: TermsService) -> Self {
		Self { service: Arc::new(service) }
	}
}
