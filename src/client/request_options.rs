use crate::webc::{Credentials, MultipartBody, WebBody};
use reqwest::Method;
use serde_json::Value;

/// Caller side options of a portal request, before url, token, and body resolution.
///
/// - `data` is a structured payload, form-encoded for POST and sent as query parameters otherwise.
/// - `body` is a raw body (multipart or pre-encoded), sent without a `Content-Type`
///   so that the transport can set the right one.
/// - `headers`, when set, replace the default POST headers.
#[derive(Debug, Clone)]
pub struct RequestOptions {
	pub method: Method,
	pub headers: Option<Vec<(String, String)>>,
	pub body: Option<WebBody>,
	pub data: Option<Value>,
	pub credentials: Option<Credentials>,
	pub query: Vec<(String, String)>,
}

impl Default for RequestOptions {
	fn default() -> Self {
		Self {
			method: Method::GET,
			headers: None,
			body: None,
			data: None,
			credentials: None,
			query: Vec::new(),
		}
	}
}

/// Constructors
impl RequestOptions {
	pub fn get() -> Self {
		Self::default()
	}

	pub fn post_form(data: Value) -> Self {
		Self {
			method: Method::POST,
			data: Some(data),
			..Default::default()
		}
	}

	pub fn post_multipart(multipart: MultipartBody) -> Self {
		Self {
			method: Method::POST,
			body: Some(WebBody::Multipart(multipart)),
			..Default::default()
		}
	}
}

/// Chainable setters
impl RequestOptions {
	pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
		self.query.push((key.into(), value.to_string()));
		self
	}

	pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
		self.headers = Some(headers);
		self
	}

	pub fn with_credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = Some(credentials);
		self
	}
}
