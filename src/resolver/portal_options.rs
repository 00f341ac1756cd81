/// Per-call override of the session portal and token.
///
/// Passing `Some(&PortalOptions)` means the token comes from here only: a `None` token
/// makes the call unauthenticated, it does not fall back to the session token.
/// The hostname still falls back to the session hostname when absent.
#[derive(Debug, Clone, Default)]
pub struct PortalOptions {
	pub portal_hostname: Option<String>,
	pub token: Option<String>,
}

impl PortalOptions {
	pub fn new(portal_hostname: impl Into<String>) -> Self {
		Self {
			portal_hostname: Some(portal_hostname.into()),
			token: None,
		}
	}

	/// Options forcing an unauthenticated call against the session portal.
	pub fn anonymous() -> Self {
		Self::default()
	}

	pub fn with_token(mut self, token: impl Into<String>) -> Self {
		self.token = Some(token.into());
		self
	}
}
