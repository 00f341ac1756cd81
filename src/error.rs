use crate::webc;
use derive_more::{Display, From};
use reqwest::StatusCode;
use value_ext::JsonValueExtError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From, Display)]
pub enum Error {
	// -- Portal responses
	/// The portal answered with a status outside of `[200, 300)`.
	#[display("Got {} {status_text}", status.as_u16())]
	PortalHttp { status: StatusCode, status_text: String },

	/// The portal answered 2xx but the body carried an `error` object.
	#[display("{message} (code {code})")]
	PortalApplication {
		code: i64,
		message: String,
		details: Vec<String>,
		status: StatusCode,
	},

	// -- Validation
	#[display(
		"This item can not be shared by {} as they are neither the owner, nor an org_admin.",
		username.as_deref().unwrap_or("anonymous")
	)]
	NotOwnerOrAdmin {
		username: Option<String>,
		owner: String,
		item_id: String,
	},

	#[display(
		"Item {item_id} could not be shared to group {group_id}. This is likely because the owner {owner} is not a member of this group."
	)]
	ItemNotShared {
		owner: String,
		item_id: String,
		group_id: String,
	},

	#[display("sharing::{operation} is deprecated. Use {replacement}.")]
	Deprecated {
		operation: &'static str,
		replacement: &'static str,
	},

	// -- Config
	#[display("Session environment variable '{env_name}' is missing")]
	SessionEnvMissing { env_name: &'static str },

	#[display("Session lock poisoned: {_0}")]
	SessionLockPoisoned(String),

	#[display("Invalid portal url '{url}': {cause}")]
	InvalidPortalUrl { url: String, cause: String },

	// -- Externals
	#[from]
	#[display("{_0}")]
	Webc(webc::Error),

	#[from]
	#[display("{_0}")]
	JsonValueExt(JsonValueExtError),

	#[from]
	#[display("{_0}")]
	SerdeJson(serde_json::Error),
}

/// Classification of the failure kinds a caller usually branches on.
impl Error {
	/// Transport-level non-2xx answer.
	pub fn is_portal_http(&self) -> bool {
		matches!(self, Self::PortalHttp { .. })
	}

	/// 2xx answer with an embedded `error` payload.
	pub fn is_portal_application(&self) -> bool {
		matches!(self, Self::PortalApplication { .. })
	}

	/// Local precondition failure, raised before (or instead of) any write.
	pub fn is_validation(&self) -> bool {
		matches!(
			self,
			Self::NotOwnerOrAdmin { .. } | Self::ItemNotShared { .. } | Self::Deprecated { .. }
		)
	}

	/// The portal error code, when the failure came from the portal itself.
	/// For `PortalHttp` this is the HTTP status.
	pub fn portal_code(&self) -> Option<i64> {
		match self {
			Self::PortalApplication { code, .. } => Some(*code),
			Self::PortalHttp { status, .. } => Some(i64::from(status.as_u16())),
			_ => None,
		}
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
