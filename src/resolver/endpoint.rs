use std::sync::Arc;

/// The resolved base url of a portal (e.g. `https://org.maps.arcgis.com`).
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	/// The portal base url, for visiting pages.
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// The REST root (`{base_url}/sharing/rest`).
	#[must_use]
	pub fn rest_url(&self) -> String {
		format!("{}/sharing/rest", self.inner)
	}
}
