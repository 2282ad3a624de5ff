mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, Pagination, Postgres, Search, SearchMode, Security, Service, Snapshot, Storage, Terms,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}

	match (cfg.storage.postgres.as_ref(), cfg.storage.snapshot.as_ref()) {
		(Some(_), Some(_)) => {
			return Err(Error::Validation {
				message: "storage.postgres and storage.snapshot are mutually exclusive.".to_string(),
			});
		},
		(None, None) => {
			return Err(Error::Validation {
				message: "One of storage.postgres or storage.snapshot is required.".to_string(),
			});
		},
		(Some(postgres), None) => {
			if postgres.dsn.trim().is_empty() {
				return Err(Error::Validation {
					message: "storage.postgres.dsn must be non-empty.".to_string(),
				});
			}
			if postgres.pool_max_conns == 0 {
				return Err(Error::Validation {
					message: "storage.postgres.pool_max_conns must be greater than zero."
						.to_string(),
				});
			}
		},
		(None, Some(snapshot)) =>
			if snapshot.path.as_os_str().is_empty() {
				return Err(Error::Validation {
					message: "storage.snapshot.path must be non-empty.".to_string(),
				});
			},
	}

	if cfg.pagination.max_page_size == 0 {
		return Err(Error::Validation {
			message: "pagination.max_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.pagination.page_size == 0 || cfg.pagination.page_size > cfg.pagination.max_page_size {
		return Err(Error::Validation {
			message: "pagination.page_size must be between 1 and pagination.max_page_size."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.security.identity_token.as_deref().map(|token| token.trim().is_empty()).unwrap_or(false)
	{
		cfg.security.identity_token = None;
	}

	cfg.terms.style = cfg.terms.style.trim().to_string();
}
