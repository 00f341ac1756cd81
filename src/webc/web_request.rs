use bytes::Bytes;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

// region:    --- WebRequest

/// A fully resolved request, ready for a `WebTransport`.
/// The url already carries `f=json` and the eventual `token`.
#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: Method,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: WebBody,
	pub credentials: Credentials,
}

impl WebRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

// endregion: --- WebRequest

// region:    --- WebBody

#[derive(Debug, Clone, Default)]
pub enum WebBody {
	#[default]
	Empty,
	/// Already `application/x-www-form-urlencoded` encoded.
	Form(String),
	/// The transport is responsible for the boundary and the matching `Content-Type`.
	Multipart(MultipartBody),
}

impl WebBody {
	pub fn as_form(&self) -> Option<&str> {
		match self {
			Self::Form(form) => Some(form),
			_ => None,
		}
	}

	pub fn as_multipart(&self) -> Option<&MultipartBody> {
		match self {
			Self::Multipart(multipart) => Some(multipart),
			_ => None,
		}
	}
}

// endregion: --- WebBody

// region:    --- MultipartBody

/// Transport independent multipart body (reqwest's `Form` can be neither cloned nor inspected).
#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
	pub parts: Vec<MultipartPart>,
}

#[derive(Debug, Clone)]
pub enum MultipartPart {
	Text {
		name: String,
		value: String,
	},
	File {
		name: String,
		file_name: String,
		mime_type: Option<String>,
		content: Bytes,
	},
}

impl MultipartBody {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.parts.push(MultipartPart::Text {
			name: name.into(),
			value: value.into(),
		});
		self
	}

	pub fn file(
		mut self,
		name: impl Into<String>,
		file_name: impl Into<String>,
		mime_type: Option<String>,
		content: impl Into<Bytes>,
	) -> Self {
		self.parts.push(MultipartPart::File {
			name: name.into(),
			file_name: file_name.into(),
			mime_type,
			content: content.into(),
		});
		self
	}

	/// Value of the first text part named `name`.
	pub fn text_value(&self, name: &str) -> Option<&str> {
		self.parts.iter().find_map(|part| match part {
			MultipartPart::Text { name: n, value } if n == name => Some(value.as_str()),
			_ => None,
		})
	}

	pub(crate) fn into_reqwest_form(self) -> super::Result<Form> {
		let mut form = Form::new();
		for part in self.parts {
			form = match part {
				MultipartPart::Text { name, value } => form.text(name, value),
				MultipartPart::File {
					name,
					file_name,
					mime_type,
					content,
				} => {
					let mut file_part = Part::bytes(content.to_vec()).file_name(file_name);
					if let Some(mime_type) = mime_type {
						file_part = file_part.mime_str(&mime_type).map_err(|err| {
							super::Error::MultipartInvalidPart {
								name: name.clone(),
								cause: err.to_string(),
							}
						})?;
					}
					form.part(name, file_part)
				}
			};
		}
		Ok(form)
	}
}

// endregion: --- MultipartBody

// region:    --- Credentials

/// Cookie policy of a request (fetch `credentials` mode).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Credentials {
	Omit,
	/// Needed for portals configured with web-tier authentication.
	#[default]
	SameOrigin,
	Include,
}

// endregion: --- Credentials
