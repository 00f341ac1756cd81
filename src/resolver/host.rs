use crate::resolver::PortalInfo;
use crate::{Error, Result};
use url::Url;

/// Protocol the hosting application is served over (the browser `location.protocol` equivalent).
/// Only used for the private portal https port rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PageProtocol {
	Http,
	#[default]
	Https,
}

/// Normalizes a portal hostname into a base url.
///
/// - `.suffix` hosts are relative and returned verbatim
/// - values with an `http://` or `https://` scheme are returned verbatim
/// - anything else defaults to `https://` (no downside to it)
pub fn resolve_host(portal_hostname: &str) -> String {
	if portal_hostname.starts_with('.')
		|| portal_hostname.starts_with("http://")
		|| portal_hostname.starts_with("https://")
	{
		portal_hostname.to_string()
	} else {
		format!("https://{portal_hostname}")
	}
}

/// Rewrites the port of a private portal url to its advertised https port.
///
/// Portal self only reports its http hostname, and without a web adaptor the standard
/// ports may not apply. So, when the page is on https and the url has an explicit port,
/// the url gets the `https` scheme and the `https_port` of the portal.
///
/// Urls that cannot be parsed as absolute urls (e.g., `.suffix` hosts) are returned as is.
pub fn fix_url(url: &str, portal: &PortalInfo, page_protocol: PageProtocol) -> Result<String> {
	if page_protocol != PageProtocol::Https {
		return Ok(url.to_string());
	}
	let Ok(mut parsed) = Url::parse(url) else {
		return Ok(url.to_string());
	};
	if parsed.port().is_none() {
		return Ok(url.to_string());
	}

	parsed.set_scheme("https").map_err(|_| Error::InvalidPortalUrl {
		url: url.to_string(),
		cause: "cannot switch scheme to https".to_string(),
	})?;
	parsed.set_port(Some(portal.https_port)).map_err(|_| Error::InvalidPortalUrl {
		url: url.to_string(),
		cause: format!("cannot set port {}", portal.https_port),
	})?;

	Ok(parsed.as_str().trim_end_matches('/').to_string())
}
