use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const PORTAL_HOSTNAME_ENV_NAME: &str = "PORTAL_HOSTNAME";
pub const PORTAL_TOKEN_ENV_NAME: &str = "PORTAL_TOKEN";

// region:    --- Session

/// The signed-in (or anonymous) user context every portal call reads from.
///
/// The client never owns the sign-in flow; it is handed a `Session` and only writes back
/// into it to correct a stale `AuthManager::portal`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
	pub portal_hostname: String,
	pub token: Option<String>,
	/// The `portals/self` information, when known.
	pub portal: Option<PortalInfo>,
	pub auth_mgr: Option<AuthManager>,
	pub current_user: Option<CurrentUser>,
}

/// Constructors
impl Session {
	pub fn new(portal_hostname: impl Into<String>) -> Self {
		Self {
			portal_hostname: portal_hostname.into(),
			..Default::default()
		}
	}

	/// Session from `PORTAL_HOSTNAME` (required) and `PORTAL_TOKEN` (optional).
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Same as `from_env`, with the variables read through `lookup`.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let portal_hostname = lookup(PORTAL_HOSTNAME_ENV_NAME)
			.filter(|h| !h.is_empty())
			.ok_or(Error::SessionEnvMissing {
				env_name: PORTAL_HOSTNAME_ENV_NAME,
			})?;
		let token = lookup(PORTAL_TOKEN_ENV_NAME).filter(|t| !t.is_empty());

		Ok(Self {
			portal_hostname,
			token,
			..Default::default()
		})
	}
}

/// Setters (builder style)
impl Session {
	pub fn with_token(mut self, token: impl Into<String>) -> Self {
		self.token = Some(token.into());
		self
	}

	pub fn with_portal(mut self, portal: PortalInfo) -> Self {
		self.portal = Some(portal);
		self
	}

	pub fn with_auth_mgr(mut self, auth_mgr: AuthManager) -> Self {
		self.auth_mgr = Some(auth_mgr);
		self
	}

	pub fn with_current_user(mut self, current_user: CurrentUser) -> Self {
		self.current_user = Some(current_user);
		self
	}
}

/// Getters
impl Session {
	pub fn is_portal(&self) -> bool {
		self.portal.as_ref().is_some_and(|p| p.is_portal)
	}

	pub fn username(&self) -> Option<&str> {
		self.current_user.as_ref().map(|u| u.username.as_str())
	}

	pub fn is_admin(&self) -> bool {
		self.current_user.as_ref().is_some_and(CurrentUser::is_admin)
	}
}

// endregion: --- Session

// region:    --- PortalInfo

/// Subset of the `portals/self` response the client cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalInfo {
	#[serde(default)]
	pub id: Option<String>,
	/// True for a dedicated (Enterprise) portal, false for ArcGIS Online.
	#[serde(default)]
	pub is_portal: bool,
	#[serde(default = "default_https_port")]
	pub https_port: u16,
}

impl Default for PortalInfo {
	fn default() -> Self {
		Self {
			id: None,
			is_portal: false,
			https_port: default_https_port(),
		}
	}
}

fn default_https_port() -> u16 {
	443
}

// endregion: --- PortalInfo

// region:    --- CurrentUser

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
	pub username: String,
	#[serde(default)]
	pub role: Option<String>,
	/// Set for custom roles; a custom role based on `org_admin` is not a full admin.
	#[serde(default)]
	pub role_id: Option<String>,
}

impl CurrentUser {
	pub fn new(username: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			..Default::default()
		}
	}

	pub fn with_role(mut self, role: impl Into<String>) -> Self {
		self.role = Some(role.into());
		self
	}

	pub fn is_admin(&self) -> bool {
		self.role.as_deref() == Some("org_admin") && self.role_id.is_none()
	}
}

// endregion: --- CurrentUser

// region:    --- AuthManager

/// The session authentication handed to deeper request layers.
/// `portal` is the rest url the token was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthManager {
	pub portal: String,
	pub username: Option<String>,
	token: String,
}

impl AuthManager {
	pub fn new(portal: impl Into<String>, token: impl Into<String>) -> Self {
		Self {
			portal: portal.into(),
			username: None,
			token: token.into(),
		}
	}

	pub fn token(&self) -> &str {
		&self.token
	}
}

// endregion: --- AuthManager
