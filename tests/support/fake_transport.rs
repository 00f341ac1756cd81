use portal_rest::webc::{WebRequest, WebResponse, WebTransport};
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// In memory transport: replays seeded responses in order and records every request.
/// When no response is left, answers `500`.
#[derive(Debug, Default)]
pub struct FakeTransport {
	responses: Mutex<VecDeque<WebResponse>>,
	requests: Mutex<Vec<WebRequest>>,
}

impl FakeTransport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_json(self, json: Value) -> Self {
		self.push_response(WebResponse::from_json(StatusCode::OK, &json));
		self
	}

	pub fn with_response(self, response: WebResponse) -> Self {
		self.push_response(response);
		self
	}

	pub fn push_response(&self, response: WebResponse) {
		if let Ok(mut responses) = self.responses.lock() {
			responses.push_back(response);
		}
	}

	pub fn requests(&self) -> Vec<WebRequest> {
		self.requests.lock().map(|r| r.clone()).unwrap_or_default()
	}

	pub fn request_count(&self) -> usize {
		self.requests.lock().map(|r| r.len()).unwrap_or_default()
	}

	pub fn last_request(&self) -> Option<WebRequest> {
		self.requests.lock().ok().and_then(|r| r.last().cloned())
	}
}

impl WebTransport for FakeTransport {
	async fn send(&self, request: WebRequest) -> portal_rest::Result<WebResponse> {
		if let Ok(mut requests) = self.requests.lock() {
			requests.push(request);
		}
		let response = self.responses.lock().ok().and_then(|mut r| r.pop_front());
		Ok(response.unwrap_or_else(|| WebResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "no response seeded")))
	}
}
