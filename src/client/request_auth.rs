use crate::resolver::AuthManager;

/// The authentication handed to deeper request layers (e.g., a request signer).
///
/// - `Fixed`: a one-time record for a per-call token
/// - `Session`: the session `AuthManager`, with its portal already checked against the session
/// - `Anonymous`: no token, only the portal rest url
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestAuth {
	Fixed { portal: String, token: String },
	Session(AuthManager),
	Anonymous { portal: String },
}

impl RequestAuth {
	/// The portal rest url the request goes to.
	pub fn portal(&self) -> &str {
		match self {
			Self::Fixed { portal, .. } | Self::Anonymous { portal } => portal,
			Self::Session(auth_mgr) => &auth_mgr.portal,
		}
	}

	pub fn token(&self) -> Option<&str> {
		match self {
			Self::Fixed { token, .. } => Some(token),
			Self::Session(auth_mgr) => Some(auth_mgr.token()),
			Self::Anonymous { .. } => None,
		}
	}
}
