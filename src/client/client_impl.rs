use crate::items::Items;
use crate::portal::PortalAdmin;
use crate::resolver::{Endpoint, PortalOptions, fix_url, resolve_host};
use crate::sharing::Sharing;
use crate::webc::{
	Credentials, WebBody, WebRequest, WebResponse, WebTransport, append_query, encode_form, form_value_to_string,
	has_query_param,
};
use crate::{Client, Error, RequestAuth, RequestOptions, Result};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

// region:    --- Url & Token Resolution

impl<T> Client<T> {
	/// The portal base url (for visiting pages).
	/// The hostname of `portal_opts` wins over the session one.
	pub fn portal_url(&self, portal_opts: Option<&PortalOptions>) -> Result<Endpoint> {
		let session = self.session_read()?;
		let portal_hostname = portal_opts
			.and_then(|o| o.portal_hostname.as_deref())
			.filter(|h| !h.is_empty())
			.unwrap_or(session.portal_hostname.as_str());
		let host = resolve_host(portal_hostname);

		let url = match session.portal.as_ref().filter(|p| p.is_portal) {
			Some(portal) => fix_url(&host, portal, self.config().page_protocol())?,
			None => host,
		};
		Ok(Endpoint::from_owned(url))
	}

	/// The portal REST root, `{portal_url}/sharing/rest`.
	pub fn portal_rest_url(&self, portal_opts: Option<&PortalOptions>) -> Result<String> {
		Ok(self.portal_url(portal_opts)?.rest_url())
	}

	/// The token for a call. `portal_opts`, when given, is authoritative even without a token.
	pub fn token(&self, portal_opts: Option<&PortalOptions>) -> Result<Option<String>> {
		let token = match portal_opts {
			Some(portal_opts) => portal_opts.token.clone(),
			None => self.session_read()?.token.clone(),
		};
		Ok(token.filter(|t| !t.is_empty()))
	}

	/// The authentication to hand to a deeper request layer.
	///
	/// Without `portal_opts`, the session `AuthManager` is reused, after its portal
	/// is corrected to the current rest url when they differ.
	pub fn request_auth(&self, portal_opts: Option<&PortalOptions>) -> Result<RequestAuth> {
		let portal = self.portal_rest_url(portal_opts)?;

		if let Some(portal_opts) = portal_opts {
			let auth = match portal_opts.token.as_deref().filter(|t| !t.is_empty()) {
				Some(token) => RequestAuth::Fixed {
					portal,
					token: token.to_string(),
				},
				None => RequestAuth::Anonymous { portal },
			};
			return Ok(auth);
		}

		let mut session = self.session_write()?;
		let portal_hostname = session.portal_hostname.clone();
		let auth = match session.auth_mgr.as_mut() {
			Some(auth_mgr) => {
				if auth_mgr.portal != portal {
					warn!(
						"AuthMgr.portal ({}) does not match session portal_hostname ({portal_hostname})",
						auth_mgr.portal
					);
					auth_mgr.portal = portal;
				}
				RequestAuth::Session(auth_mgr.clone())
			}
			None => RequestAuth::Anonymous { portal },
		};
		Ok(auth)
	}
}

// endregion: --- Url & Token Resolution

// region:    --- Request Building

impl<T> Client<T> {
	/// Build the request for a path relative to the portal REST root.
	pub fn build_request(
		&self,
		url_path: &str,
		options: RequestOptions,
		portal_opts: Option<&PortalOptions>,
	) -> Result<WebRequest> {
		let url = format!("{}{url_path}", self.portal_rest_url(portal_opts)?);
		self.build_request_url(url, options, portal_opts)
	}

	/// Build the request for a fully formed url (e.g., a hosted service url).
	pub fn build_request_url(
		&self,
		url: impl Into<String>,
		options: RequestOptions,
		portal_opts: Option<&PortalOptions>,
	) -> Result<WebRequest> {
		let RequestOptions {
			method,
			headers,
			body,
			data,
			credentials,
			query,
		} = options;

		let mut url = url.into();
		for (k, v) in &query {
			append_query(&mut url, k, v);
		}

		let (headers, body) = if method == Method::POST {
			// AGO does care about the content type of a POST
			let mut headers = headers.unwrap_or_else(|| self.default_post_headers());
			let mut body = body.unwrap_or_default();
			if !matches!(body, WebBody::Empty) {
				headers.retain(|(k, _)| !k.eq_ignore_ascii_case("content-type"));
			}
			if let Some(data) = data.as_ref() {
				body = WebBody::Form(encode_form(data));
			}
			(headers, body)
		} else {
			if let Some(Value::Object(data)) = data.as_ref() {
				for (k, v) in data.iter().filter(|(_, v)| !v.is_null()) {
					append_query(&mut url, k, &form_value_to_string(v));
				}
			}
			(headers.unwrap_or_default(), WebBody::Empty)
		};

		if !has_query_param(&url, "f") {
			append_query(&mut url, "f", "json");
		}

		if let Some(token) = self.token(portal_opts)? {
			append_query(&mut url, "token", &token);
		}

		Ok(WebRequest {
			method,
			url,
			headers,
			body,
			credentials: credentials.unwrap_or(Credentials::SameOrigin),
		})
	}

	fn default_post_headers(&self) -> Vec<(String, String)> {
		vec![
			("Accept".to_string(), self.config().accept().to_string()),
			("Content-Type".to_string(), CONTENT_TYPE_FORM.to_string()),
		]
	}
}

// endregion: --- Request Building

// region:    --- Request Execution

impl<T: WebTransport> Client<T> {
	/// Request a path relative to the portal REST root and return the parsed json.
	pub async fn request(
		&self,
		url_path: &str,
		options: RequestOptions,
		portal_opts: Option<&PortalOptions>,
	) -> Result<Value> {
		let web_request = self.build_request(url_path, options, portal_opts)?;
		self.send(web_request).await
	}

	/// Request a fully formed url and return the parsed json.
	pub async fn request_url(
		&self,
		url: impl Into<String>,
		options: RequestOptions,
		portal_opts: Option<&PortalOptions>,
	) -> Result<Value> {
		let web_request = self.build_request_url(url, options, portal_opts)?;
		self.send(web_request).await
	}

	async fn send(&self, web_request: WebRequest) -> Result<Value> {
		debug!("portal request: {} {}", web_request.method, redact_token(&web_request.url));
		let web_response = self.transport().send(web_request).await?;
		check_status_and_parse_json(web_response)
	}
}

// endregion: --- Request Execution

// region:    --- Accessors

impl<T> Client<T> {
	/// Portal administration calls (properties, resources, users).
	pub fn portals(&self) -> PortalAdmin<'_, T> {
		PortalAdmin::new(self)
	}

	/// Item sharing calls.
	pub fn sharing(&self) -> Sharing<'_, T> {
		Sharing::new(self)
	}

	/// Item search.
	pub fn items(&self) -> Items<'_, T> {
		Items::new(self)
	}
}

// endregion: --- Accessors

// region:    --- Response Handling

/// Turn a portal response into its json, or into the matching error.
///
/// The portal often answers `200` with an `{"error": {..}}` body; those become
/// `Error::PortalApplication` (code defaults to 404). Non-2xx become `Error::PortalHttp`.
pub fn check_status_and_parse_json(web_response: WebResponse) -> Result<Value> {
	let status = web_response.status;
	if !status.is_success() {
		return Err(Error::PortalHttp {
			status,
			status_text: web_response.status_text().to_string(),
		});
	}

	let json = web_response.json()?;
	let error = json.get("error").filter(|e| is_truthy(e)).cloned();
	let Some(error) = error else {
		return Ok(json);
	};

	let code = error
		.get("code")
		.and_then(|c| c.as_i64().or_else(|| c.as_str().and_then(|s| s.parse().ok())))
		.filter(|c| *c != 0)
		.unwrap_or(404);
	let message = error.get("message").and_then(Value::as_str).unwrap_or_default().to_string();
	let details = error
		.get("details")
		.and_then(Value::as_array)
		.map(|details| details.iter().filter_map(Value::as_str).map(ToString::to_string).collect())
		.unwrap_or_default();

	debug!("Error in response: {message}");
	Err(Error::PortalApplication {
		code,
		message,
		details,
		status,
	})
}

/// Truthiness of a json value, as the portal clients test `json.error`.
fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Url with the `token` value masked, for logs.
fn redact_token(url: &str) -> String {
	let Some(start) = url.find("token=").map(|i| i + "token=".len()) else {
		return url.to_string();
	};
	let end = url[start..].find('&').map_or(url.len(), |i| start + i);
	format!("{}***{}", &url[..start], &url[end..])
}

// endregion: --- Response Handling
