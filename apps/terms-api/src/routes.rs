use axum::{
	Json, Router,
	extract::{Path, RawQuery, State},
	http::{HeaderMap, StatusCode, Uri},
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use crate::{
	query::{ListParams, PageLinks, page_param},
	requester::resolve_requester,
	state::AppState,
};
use terms_service::{Error as ServiceError, Requester, TagPage, TermItem};

const NOT_FOUND_MESSAGE: &str = "Not found.";
const UNAVAILABLE_MESSAGE: &str = "Term source is unavailable.";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/terms/", get(list_terms))
		.route("/api/terms/tags/", get(tag_report))
		.route("/api/terms/{id}/", get(term_detail))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

#[derive(Debug, Serialize)]
pub struct ListEnvelope {
	pub count: usize,
	pub total_pages: u32,
	pub current_page: u32,
	pub next: Option<String>,
	pub previous: Option<String>,
	pub results: Vec<TermItem>,
}

async fn list_terms(
	State(state): State<AppState>,
	headers: HeaderMap,
	uri: Uri,
	RawQuery(raw): RawQuery,
) -> Result<Json<ListEnvelope>, ApiError> {
	let requester = requester(&state, &headers);
	let params = ListParams::parse(raw.as_deref());
	let page = state.service.list(params.into_request(requester)).await?;
	let links = PageLinks::for_page(&page, &headers, &uri);

	Ok(Json(ListEnvelope {
		count: page.count,
		total_pages: page.total_pages,
		current_page: page.current_page,
		next: links.next,
		previous: links.previous,
		results: page.results,
	}))
}

async fn term_detail(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path(id): Path<String>,
) -> Result<Json<TermItem>, ApiError> {
	let Ok(id) = id.parse::<i64>() else {
		return Err(ApiError::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE));
	};
	let requester = requester(&state, &headers);
	let item = state.service.term(id, &requester).await?;

	Ok(Json(item))
}

async fn tag_report(
	State(state): State<AppState>,
	headers: HeaderMap,
	RawQuery(raw): RawQuery,
) -> Result<Json<TagPage>, ApiError> {
	let requester = requester(&state, &headers);
	let report = state.service.tag_report(&requester, page_param(raw.as_deref())).await?;

	Ok(Json(report))
}

fn requester(state: &AppState, headers: &HeaderMap) -> Requester {
	resolve_requester(headers, state.service.cfg.security.identity_token.as_deref())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::PermissionDenied { message } => Self::new(StatusCode::FORBIDDEN, message),
			ServiceError::FeatureDisabled | ServiceError::NotFound { .. } =>
				Self::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
			ServiceError::Storage { .. } | ServiceError::Index { .. } => {
				tracing::error!(error = %err, "Request failed upstream.");

				Self::new(StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
