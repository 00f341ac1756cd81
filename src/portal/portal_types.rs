use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

// region:    --- Portal

/// A portal (`portals/self` or `portals/{id}`) as returned by the server.
///
/// Only `portal_properties` can be written back; every other field is
/// write-protected by never being serialized on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portal {
	pub id: String,
	#[serde(default)]
	pub portal_properties: Option<Value>,
	#[serde(flatten)]
	pub other: Map<String, Value>,
}

impl Portal {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			..Default::default()
		}
	}

	pub fn with_portal_properties(mut self, portal_properties: Value) -> Self {
		self.portal_properties = Some(portal_properties);
		self
	}

	/// The update payload: `portalProperties` as a json string, nothing else.
	pub fn to_update_data(&self) -> Value {
		match &self.portal_properties {
			Some(props) => json!({ "portalProperties": props.to_string() }),
			None => json!({}),
		}
	}
}

// endregion: --- Portal

// region:    --- ResourceFile

/// A file to upload as a portal resource. `name` becomes the resource key.
#[derive(Debug, Clone)]
pub struct ResourceFile {
	pub name: String,
	pub mime_type: Option<String>,
	pub content: Bytes,
}

impl ResourceFile {
	pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
		Self {
			name: name.into(),
			mime_type: None,
			content: content.into(),
		}
	}

	pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
		self.mime_type = Some(mime_type.into());
		self
	}
}

// endregion: --- ResourceFile

// region:    --- Paging

/// Paging of list calls (1-based `start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
	pub start: u32,
	pub num: u32,
}

impl Default for Paging {
	fn default() -> Self {
		Self { start: 1, num: 100 }
	}
}

impl Paging {
	pub fn new(start: u32, num: u32) -> Self {
		Self { start, num }
	}
}

// endregion: --- Paging
