//! Identity facts forwarded by the authenticating proxy in front of this service.

use axum::http::HeaderMap;

use terms_service::Requester;

pub const USER_HEADER: &str = "x-terms-user";
pub const ELEVATED_HEADER: &str = "x-terms-elevated";
pub const ROLES_HEADER: &str = "x-terms-roles";
pub const IDENTITY_TOKEN_HEADER: &str = "x-terms-identity-token";

/// Builds the requester from headers. Any doubt resolves to anonymous.
pub fn resolve_requester(headers: &HeaderMap, identity_token: Option<&str>) -> Requester {
	if let Some(expected) = identity_token
		&& header_value(headers, IDENTITY_TOKEN_HEADER) != Some(expected)
	{
		return Requester::anonymous();
	}

	let Some(_user) = header_value(headers, USER_HEADER) else {
		return Requester::anonymous();
	};
	let elevated = header_value(headers, ELEVATED_HEADER)
		.map(|value| value.eq_ignore_ascii_case("true") || value == "1")
		.unwrap_or(false);
	let roles = header_value(headers, ROLES_HEADER)
		.map(|value| {
			value
				.split(',')
				.map(str::trim)
				.filter(|role| !role.is_empty())
				.map(str::to_string)
				.collect()
		})
		.unwrap_or_default();

	Requester { authenticated: true, elevated, roles }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers
		.get(name)
		.and_then(|value| value.to_str().ok())
		.map(|value| value.trim())
		.filter(|value| !value.is_empty())
}
