use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub terms: Terms,
	#[serde(default)]
	pub pagination: Pagination,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Option<Postgres>,
	pub snapshot: Option<Snapshot>,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Snapshot {
	/// JSON array of term records, read once at startup.
	pub path: PathBuf,
}

/// Options shared with the editing surface. Only `disable_tags` changes how terms are served.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Terms {
	pub disable_tags: bool,
	pub icon: String,
	pub menu_order: i32,
	pub style: String,
}
impl Default for Terms {
	fn default() -> Self {
		Self {
			disable_tags: false,
			icon: "snippet".to_string(),
			menu_order: 200,
			style: String::new(),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Pagination {
	pub page_size: u32,
	pub max_page_size: u32,
}
impl Default for Pagination {
	fn default() -> Self {
		Self { page_size: 20, max_page_size: 100 }
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Search {
	pub mode: SearchMode,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
	#[default]
	Partial,
	Exact,
	Autocomplete,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Security {
	pub bind_localhost_only: bool,
	/// Shared secret the upstream proxy sends alongside identity headers.
	pub identity_token: Option<String>,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: true, identity_token: None }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
