use crate::webc::{Credentials, Error, Result, WebBody, WebRequest};
use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use std::future::Future;
use tracing::warn;

// region:    --- WebTransport

/// The HTTP fetch capability the portal client sits on.
///
/// Implementations only move bytes: status interpretation and error payloads
/// are handled by the `Client`.
pub trait WebTransport {
	fn send(&self, request: WebRequest) -> impl Future<Output = crate::Result<WebResponse>> + Send;
}

// endregion: --- WebTransport

// region:    --- WebClient

/// Default `WebTransport` backed by `reqwest`.
///
/// Holds two clients so that `Credentials::Omit` requests never see the cookie store.
#[derive(Debug, Clone)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
	anonymous_client: reqwest::Client,
}

impl Default for WebClient {
	/// Falls back to a cookie-less client (with a warning) when the cookie store client cannot be built.
	fn default() -> Self {
		match Self::try_new() {
			Ok(web_client) => web_client,
			Err(err) => {
				warn!("WebClient - cookie store client could not be built, cookies will not be kept: {err}");
				Self::from_reqwest_client(reqwest::Client::new())
			}
		}
	}
}

impl WebClient {
	pub fn try_new() -> Result<Self> {
		let reqwest_client = reqwest::Client::builder().cookie_store(true).build()?;
		let anonymous_client = reqwest::Client::builder().build()?;
		Ok(Self {
			reqwest_client,
			anonymous_client,
		})
	}

	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self {
			reqwest_client,
			anonymous_client: reqwest::Client::new(),
		}
	}

	/// The reqwest client for a credentials mode. `Omit` never sees the cookie store.
	fn client_for(&self, credentials: Credentials) -> &reqwest::Client {
		match credentials {
			Credentials::Omit => &self.anonymous_client,
			Credentials::SameOrigin | Credentials::Include => &self.reqwest_client,
		}
	}

	/// Turn a `WebRequest` into the reqwest client and request to execute.
	/// For multipart bodies, reqwest sets the `Content-Type` with its boundary.
	fn to_reqwest_request(&self, request: WebRequest) -> Result<(&reqwest::Client, reqwest::Request)> {
		let WebRequest {
			method,
			url,
			headers,
			body,
			credentials,
		} = request;

		let client = self.client_for(credentials);

		let mut reqwest_builder = client.request(method, &url);
		for (k, v) in headers {
			reqwest_builder = reqwest_builder.header(k, v);
		}

		reqwest_builder = match body {
			WebBody::Empty => reqwest_builder,
			WebBody::Form(form) => reqwest_builder.body(form),
			WebBody::Multipart(multipart) => reqwest_builder.multipart(multipart.into_reqwest_form()?),
		};

		Ok((client, reqwest_builder.build()?))
	}

	async fn do_send(&self, request: WebRequest) -> Result<WebResponse> {
		let (client, reqwest_request) = self.to_reqwest_request(request)?;

		let reqwest_res = client.execute(reqwest_request).await?;
		let status = reqwest_res.status();
		let body = reqwest_res.bytes().await?;

		Ok(WebResponse { status, body })
	}
}

impl WebTransport for WebClient {
	async fn send(&self, request: WebRequest) -> crate::Result<WebResponse> {
		Ok(self.do_send(request).await?)
	}
}

// endregion: --- WebClient

// region:    --- WebResponse

#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: StatusCode,
	pub body: Bytes,
}

impl WebResponse {
	pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// Convenience for transports and tests holding a json value.
	pub fn from_json(status: StatusCode, json: &Value) -> Self {
		Self::new(status, json.to_string())
	}

	pub fn status_text(&self) -> &'static str {
		self.status.canonical_reason().unwrap_or("")
	}

	pub fn json(&self) -> Result<Value> {
		serde_json::from_slice(&self.body).map_err(|err| Error::ResponseFailedNotJson {
			status: self.status,
			body: String::from_utf8_lossy(&self.body).to_string(),
			cause: err.to_string(),
		})
	}
}

// endregion: --- WebResponse
