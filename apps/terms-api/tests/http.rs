use std::{collections::BTreeSet, path::PathBuf, sync::Arc};

use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use terms_api::{routes, state::AppState};
use terms_config::{
	Config, Pagination, Search, SearchMode, Security, Service, Snapshot, Storage, Terms,
};
use terms_service::{Term, TermsService};
use terms_storage::snapshot::SnapshotStore;

fn test_config(disable_tags: bool, identity_token: Option<&str>) -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		storage: Storage {
			postgres: None,
			snapshot: Some(Snapshot { path: PathBuf::from("terms.json") }),
		},
		terms: Terms { disable_tags, ..Terms::default() },
		pagination: Pagination { page_size: 20, max_page_size: 100 },
		search: Search { mode: SearchMode::Partial },
		security: Security {
			bind_localhost_only: true,
			identity_token: identity_token.map(str::to_string),
		},
	}
}

fn term(id: i64, name: &str, live: bool, tags: &[&str]) -> Term {
	Term {
		id,
		term: name.to_string(),
		definition: format!("<p>Definition of {name}</p>"),
		live,
		tags: tags.iter().map(|tag| tag.to_string()).collect::<BTreeSet<_>>(),
	}
}

fn five_terms() -> Vec<Term> {
	vec![
		term(1, "Test Term", true, &["tag1", "tag2"]),
		term(2, "Test Term 2", true, &["tag1"]),
		term(3, "Test Term 3", true, &[]),
		term(4, "Test Term 4", false, &["tag1", "tag2"]),
		term(5, "Test Term 5", false, &[]),
	]
}

fn app_with(cfg: Config, terms: Vec<Term>) -> Router {
	let store = SnapshotStore::from_terms(terms).expect("Failed to build snapshot store.");
	let service = TermsService::new(cfg, Arc::new(store));

	routes::router(AppState::from_service(service))
}

fn app(terms: Vec<Term>) -> Router {
	app_with(test_config(false, None), terms)
}

fn get(uri: &str) -> Request<Body> {
	Request::builder()
		.uri(uri)
		.header("host", "testserver")
		.body(Body::empty())
		.expect("Failed to build request.")
}

fn get_as(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
	let mut builder = Request::builder().uri(uri).header("host", "testserver");

	for (name, value) in headers {
		builder = builder.header(*name, *value);
	}

	builder.body(Body::empty()).expect("Failed to build request.")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
	let response = app.oneshot(request).await.expect("Failed to call router.");
	let status = response.status();
	let bytes =
		body::to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body.");
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Failed to parse response body.")
	};

	(status, json)
}

fn result_ids(body: &Value) -> Vec<i64> {
	body["results"]
		.as_array()
		.expect("results must be an array.")
		.iter()
		.map(|item| item["id"].as_i64().expect("id must be an integer."))
		.collect()
}

const STAFF: &[(&str, &str)] = &[("x-terms-user", "admin"), ("x-terms-elevated", "true")];
const EDITOR: &[(&str, &str)] = &[("x-terms-user", "editor"), ("x-terms-roles", "Editors")];

#[tokio::test]
async fn health_is_ok() {
	let (status, _) = send(app(Vec::new()), get("/health")).await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn anonymous_list_shows_live_terms_only() {
	let (status, body) = send(app(five_terms()), get("/api/terms/")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["count"], json!(3));
	assert_eq!(body["total_pages"], json!(1));
	assert_eq!(body["current_page"], json!(1));
	assert_eq!(body["next"], Value::Null);
	assert_eq!(body["previous"], Value::Null);
	assert_eq!(result_ids(&body), vec![1, 2, 3]);
	assert_eq!(
		body["results"][0],
		json!({
			"id": 1,
			"term": "Test Term",
			"definition": "<p>Definition of Test Term</p>",
			"tags": ["tag1", "tag2"],
		})
	);
}

#[tokio::test]
async fn elevated_list_includes_drafts() {
	let (status, body) = send(app(five_terms()), get_as("/api/terms/", STAFF)).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["count"], json!(5));
	assert_eq!(result_ids(&body), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn authenticated_without_elevation_sees_live_terms() {
	let (_, body) =
		send(app(five_terms()), get_as("/api/terms/", &[("x-terms-user", "reader")])).await;

	assert_eq!(result_ids(&body), vec![1, 2, 3]);
}

#[tokio::test]
async fn repeated_tags_require_every_tag() {
	let (_, body) = send(app(five_terms()), get("/api/terms/?tags=tag1&tags=tag2")).await;

	assert_eq!(result_ids(&body), vec![1]);

	let (_, body) = send(app(five_terms()), get_as("/api/terms/?tags=tag1", STAFF)).await;

	assert_eq!(result_ids(&body), vec![1, 2, 4]);
}

#[tokio::test]
async fn unknown_tag_yields_empty_page() {
	let (status, body) = send(app(five_terms()), get("/api/terms/?tags=missing")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["count"], json!(0));
	assert_eq!(body["total_pages"], json!(0));
	assert_eq!(result_ids(&body), Vec::<i64>::new());
}

#[tokio::test]
async fn search_narrows_visible_terms() {
	let terms = vec![
		term(1, "Alpha", true, &[]),
		term(2, "Beta", true, &[]),
		term(3, "Alpha Draft", false, &[]),
	];
	let (_, body) = send(app(terms), get("/api/terms/?q=alpha")).await;

	assert_eq!(result_ids(&body), vec![1]);
}

#[tokio::test]
async fn last_page_links_back_only() {
	let terms = (1..=45).map(|id| term(id, &format!("Term {id}"), true, &[])).collect();
	let (status, body) = send(app(terms), get("/api/terms/?page=3")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["count"], json!(45));
	assert_eq!(body["total_pages"], json!(3));
	assert_eq!(body["current_page"], json!(3));
	assert_eq!(result_ids(&body), (41..=45).collect::<Vec<_>>());
	assert_eq!(body["next"], Value::Null);
	assert_eq!(body["previous"], json!("http://testserver/api/terms/?page=2"));
}

#[tokio::test]
async fn next_link_keeps_other_parameters() {
	let terms = (1..=45).map(|id| term(id, &format!("Term {id}"), true, &["shared"])).collect();
	let (_, body) = send(app(terms), get("/api/terms/?tags=shared")).await;

	assert_eq!(body["next"], json!("http://testserver/api/terms/?tags=shared&page=2"));
	assert_eq!(body["previous"], Value::Null);

	let terms = (1..=45).map(|id| term(id, &format!("Term {id}"), true, &["shared"])).collect();
	let (_, body) = send(app(terms), get("/api/terms/?tags=shared&page=2")).await;

	assert_eq!(body["previous"], json!("http://testserver/api/terms/?tags=shared"));
}

#[tokio::test]
async fn page_size_parameter_is_clamped() {
	let terms = (1..=45).map(|id| term(id, &format!("Term {id}"), true, &[])).collect();
	let (_, body) = send(app(terms), get("/api/terms/?page_size=10")).await;

	assert_eq!(body["total_pages"], json!(5));
	assert_eq!(result_ids(&body).len(), 10);

	let terms = (1..=150).map(|id| term(id, &format!("Term {id}"), true, &[])).collect();
	let (_, body) = send(app(terms), get("/api/terms/?page_size=500")).await;

	assert_eq!(body["total_pages"], json!(2));
	assert_eq!(result_ids(&body).len(), 100);
}

#[tokio::test]
async fn unusable_page_number_falls_back_to_first_page() {
	for uri in ["/api/terms/?page=abc", "/api/terms/?page=0", "/api/terms/?page=-4"] {
		let (status, body) = send(app(five_terms()), get(uri)).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["current_page"], json!(1));
		assert_eq!(result_ids(&body), vec![1, 2, 3]);
	}
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
	let (status, body) = send(app(five_terms()), get("/api/terms/?page=9")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["count"], json!(3));
	assert_eq!(body["current_page"], json!(9));
	assert_eq!(body["next"], Value::Null);
	assert_eq!(body["previous"], json!("http://testserver/api/terms/"));
	assert_eq!(result_ids(&body), Vec::<i64>::new());
}

#[tokio::test]
async fn tag_report_denies_anonymous_callers() {
	let (status, body) = send(app(five_terms()), get("/api/terms/tags/")).await;

	assert_eq!(status, StatusCode::FORBIDDEN);
	assert_eq!(body, json!({ "error": "You do not have permission to access this endpoint." }));
}

#[tokio::test]
async fn tag_report_denies_users_without_roles() {
	let (status, body) =
		send(app(five_terms()), get_as("/api/terms/tags/", &[("x-terms-user", "reader")])).await;

	assert_eq!(status, StatusCode::FORBIDDEN);
	assert_eq!(body, json!({ "error": "You do not have permission to access this endpoint." }));
}

#[tokio::test]
async fn tag_report_counts_live_terms_for_editors() {
	let (status, body) = send(app(five_terms()), get_as("/api/terms/tags/", EDITOR)).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		body,
		json!({
			"tags": [
				{ "name": "tag1", "count": 2 },
				{ "name": "tag2", "count": 1 },
			],
			"hasMore": false,
		})
	);
}

#[tokio::test]
async fn tag_report_allows_elevated_users() {
	let (status, _) = send(app(five_terms()), get_as("/api/terms/tags/", STAFF)).await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn tag_report_pages_in_fifties() {
	let names: Vec<String> = (0..60).map(|index| format!("tag{index:02}")).collect();
	let tags: Vec<&str> = names.iter().map(String::as_str).collect();
	let terms = vec![term(1, "Tagged", true, &tags)];
	let (_, first) = send(app(terms.clone()), get_as("/api/terms/tags/", EDITOR)).await;

	assert_eq!(first["tags"].as_array().map(Vec::len), Some(50));
	assert_eq!(first["tags"][0], json!({ "name": "tag00", "count": 1 }));
	assert_eq!(first["hasMore"], json!(true));

	let (_, second) = send(app(terms), get_as("/api/terms/tags/?page=2", EDITOR)).await;

	assert_eq!(second["tags"].as_array().map(Vec::len), Some(10));
	assert_eq!(second["tags"][0], json!({ "name": "tag50", "count": 1 }));
	assert_eq!(second["hasMore"], json!(false));
}

#[tokio::test]
async fn disabled_tags_hide_report_and_field() {
	let app = app_with(test_config(true, None), five_terms());
	let (status, _) = send(app.clone(), get_as("/api/terms/tags/", EDITOR)).await;

	assert_eq!(status, StatusCode::NOT_FOUND);

	let (status, body) = send(app, get("/api/terms/?tags=tag2")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(result_ids(&body), vec![1, 2, 3]);
	assert!(body["results"][0].get("tags").is_none());
}

#[tokio::test]
async fn detail_returns_visible_term() {
	let (status, body) = send(app(five_terms()), get("/api/terms/2/")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], json!(2));
	assert_eq!(body["term"], json!("Test Term 2"));
}

#[tokio::test]
async fn detail_hides_drafts_from_anonymous_callers() {
	let (status, body) = send(app(five_terms()), get("/api/terms/4/")).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body, json!({ "error": "Not found." }));

	let (status, _) = send(app(five_terms()), get_as("/api/terms/4/", STAFF)).await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn detail_rejects_non_numeric_ids() {
	let (status, _) = send(app(five_terms()), get("/api/terms/abc/")).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn identity_headers_need_the_shared_token() {
	let app = app_with(test_config(false, Some("secret")), five_terms());
	let (_, body) = send(app.clone(), get_as("/api/terms/", STAFF)).await;

	assert_eq!(result_ids(&body), vec![1, 2, 3]);

	let mut headers = STAFF.to_vec();

	headers.push(("x-terms-identity-token", "secret"));

	let (_, body) = send(app, get_as("/api/terms/", &headers)).await;

	assert_eq!(result_ids(&body), vec![1, 2, 3, 4, 5]);
}
