pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	PermissionDenied { message: String },
	#[error("Tags are disabled.")]
	FeatureDisabled,
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Search index error: {message}")]
	Index { message: String },
}
impl From<terms_storage::Error> for Error {
	fn from(err: terms_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}
