use std::{collections::HashSet, fs, path::Path};

use crate::{Error, Result};
use terms_domain::{MAX_TERM_NAME_CHARS, Term};

/// Terms loaded once from a JSON file, kept in ascending id order.
#[derive(Debug, Default)]
pub struct SnapshotStore {
	terms: Vec<Term>,
}
impl SnapshotStore {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadSnapshot { path: path.to_path_buf(), source: err })?;
		let terms: Vec<Term> = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseSnapshot { path: path.to_path_buf(), source: err })?;
		let store = Self::from_terms(terms)?;

		tracing::info!(path = %path.display(), terms = store.terms.len(), "Loaded term snapshot.");

		Ok(store)
	}

	pub fn from_terms(mut terms: Vec<Term>) -> Result<Self> {
		let mut seen = HashSet::with_capacity(terms.len());

		for term in &terms {
			if !seen.insert(term.id) {
				return Err(Error::InvalidSnapshot(format!("Duplicate term id {}.", term.id)));
			}
			if !term.name_fits() {
				return Err(Error::InvalidSnapshot(format!(
					"Term {} is longer than {MAX_TERM_NAME_CHARS} characters.",
					term.id
				)));
			}
		}

		terms.sort_by_key(|term| term.id);

		Ok(Self { terms })
	}

	pub fn terms(&self) -> &[Term] {
		&self.terms
	}

	pub fn get(&self, id: i64) -> Option<&Term> {
		self.terms.binary_search_by_key(&id, |term| term.id).ok().map(|index| &self.terms[index])
	}
}
