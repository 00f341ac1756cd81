use crate::resolver::PageProtocol;

pub(crate) const DEFAULT_ACCEPT: &str = "application/json, application/xml, text/plain, text/html, *.*";

/// The Client configuration used in the configuration builder stage.
#[derive(Debug, Default, Clone)]
pub struct ClientConfig {
	page_protocol: Option<PageProtocol>,
	accept: Option<String>,
}

/// Chainable setters related to the ClientConfig.
impl ClientConfig {
	/// Set the protocol the hosting application is served over.
	/// Drives the private portal https port rewrite. Defaults to `PageProtocol::Https`.
	pub fn with_page_protocol(mut self, page_protocol: PageProtocol) -> Self {
		self.page_protocol = Some(page_protocol);
		self
	}

	/// Set the `Accept` header value sent with POST requests.
	pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
		self.accept = Some(accept.into());
		self
	}
}

/// Getters for the fields of ClientConfig (as references).
impl ClientConfig {
	pub fn page_protocol(&self) -> PageProtocol {
		self.page_protocol.unwrap_or_default()
	}

	pub fn accept(&self) -> &str {
		self.accept.as_deref().unwrap_or(DEFAULT_ACCEPT)
	}
}
