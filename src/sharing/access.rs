use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Access level of an item above private. "Private" is expressed as `None`.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
	#[display("org")]
	Org,
	/// Also accepted as `public`.
	#[display("everyone")]
	#[serde(alias = "public")]
	Everyone,
}

impl Access {
	/// The `(org, everyone)` flags of the share call.
	pub fn share_flags(access: Option<Access>) -> (bool, bool) {
		match access {
			None => (false, false),
			Some(Access::Org) => (true, false),
			Some(Access::Everyone) => (true, true),
		}
	}
}

impl FromStr for Access {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"org" => Ok(Self::Org),
			"everyone" | "public" => Ok(Self::Everyone),
			other => Err(format!("Unknown access '{other}' (expected org, everyone, or public)")),
		}
	}
}
