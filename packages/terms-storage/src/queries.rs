use sqlx::PgExecutor;

use crate::{Result, models::TermRow};
use terms_domain::Term;

const TERM_SELECT: &str = "\
SELECT
	t.id,
	t.term,
	t.definition,
	t.live,
	COALESCE(
		array_agg(g.name ORDER BY g.name) FILTER (WHERE g.name IS NOT NULL),
		'{}'::text[]
	) AS tags
FROM terms t
LEFT JOIN term_tags tt ON tt.term_id = t.id
LEFT JOIN tags g ON g.id = tt.tag_id";

/// Every term with its tag names, in ascending id order.
pub async fn fetch_terms<'e, E>(executor: E) -> Result<Vec<Term>>
where
	E: PgExecutor<'e>,
{
	let sql = format!("{TERM_SELECT}\nGROUP BY t.id\nORDER BY t.id ASC");
	let rows: Vec<TermRow> = sqlx::query_as(&sql).fetch_all(executor).await?;

	Ok(rows.into_iter().map(Term::from).collect())
}

pub async fn fetch_term<'e, E>(executor: E, id: i64) -> Result<Option<Term>>
where
	E: PgExecutor<'e>,
{
	let sql = format!("{TERM_SELECT}\nWHERE t.id = $1\nGROUP BY t.id");
	let row: Option<TermRow> = sqlx::query_as(&sql).bind(id).fetch_optional(executor).await?;

	Ok(row.map(Term::from))
}
