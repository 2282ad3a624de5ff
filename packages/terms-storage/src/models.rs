use terms_domain::Term;

#[derive(Debug, sqlx::FromRow)]
pub struct TermRow {
	pub id: i64,
	pub term: String,
	pub definition: String,
	pub live: bool,
	pub tags: Vec<String>,
}
impl From<TermRow> for Term {
	fn from(row: TermRow) -> Self {
		Self {
			id: row.id,
			term: row.term,
			definition: row.definition,
			live: row.live,
			tags: row.tags.into_iter().collect(),
		}
	}
}
