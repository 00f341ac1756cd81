//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod fake_transport;
mod seeders;

pub use fake_transport::*;
pub use seeders::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

// region:    --- Common Constants

pub const HOSTNAME: &str = "org.maps.arcgis.com";
pub const REST_URL: &str = "https://org.maps.arcgis.com/sharing/rest";
pub const TOKEN: &str = "session-token";
pub const OWNER: &str = "alice";
pub const ITEM_ID: &str = "3ef8b4a0c1d24a5e9f0d1c2b3a4e5f60";
pub const GROUP_ID: &str = "9a1b2c3d4e5f40718293a4b5c6d7e8f9";

// endregion: --- Common Constants

// region:    --- Helpers

/// Decode a `x-www-form-urlencoded` body (or query string) into its pairs.
pub fn form_pairs(form: &str) -> Vec<(String, String)> {
	form.split('&')
		.filter(|pair| !pair.is_empty())
		.map(|pair| {
			let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
			let k = urlencoding::decode(k).map(|c| c.into_owned()).unwrap_or_else(|_| k.to_string());
			let v = urlencoding::decode(v).map(|c| c.into_owned()).unwrap_or_else(|_| v.to_string());
			(k, v)
		})
		.collect()
}

pub fn form_value(form: &str, key: &str) -> Option<String> {
	form_pairs(form).into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// The query string of a url (without the `?`).
pub fn query_of(url: &str) -> &str {
	url.split_once('?').map(|(_, q)| q).unwrap_or("")
}

/// Install a tracing subscriber honoring `RUST_LOG` (once per test binary).
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// endregion: --- Helpers
