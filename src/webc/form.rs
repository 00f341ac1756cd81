//! `application/x-www-form-urlencoded` helpers for portal payloads and query strings.

use serde_json::Value;
use urlencoding::encode;

/// Form-encodes a payload for a portal POST.
///
/// - A JSON string is taken as an already encoded body and returned verbatim.
/// - For an object, every non-null entry becomes `key=value`, both percent-encoded, joined by `&`.
/// - Any other value encodes to an empty body.
pub fn encode_form(form: &Value) -> String {
	match form {
		Value::String(raw) => raw.clone(),
		Value::Object(map) => map
			.iter()
			.filter(|(_, value)| !value.is_null())
			.map(|(key, value)| format!("{}={}", encode(key), encode(&form_value_to_string(value))))
			.collect::<Vec<_>>()
			.join("&"),
		_ => String::new(),
	}
}

/// Textual form of a single form value.
/// Strings are used raw (no surrounding quotes), everything else as compact JSON.
pub fn form_value_to_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Appends `key=value` to the url, with `?` for the first parameter and `&` otherwise.
pub fn append_query(url: &mut String, key: &str, value: &str) {
	let sep = if url.contains('?') { '&' } else { '?' };
	url.push(sep);
	url.push_str(&encode(key));
	url.push('=');
	url.push_str(&encode(value));
}

/// Returns true if the url query already carries `key`.
pub fn has_query_param(url: &str, key: &str) -> bool {
	let Some((_, query)) = url.split_once('?') else {
		return false;
	};
	query
		.split('&')
		.any(|pair| pair.split_once('=').map_or(pair, |(k, _)| k) == key)
}
