use crate::portal::{Paging, Portal, ResourceFile};
use crate::resolver::PortalOptions;
use crate::webc::{MultipartBody, WebTransport};
use crate::{Client, RequestOptions, Result};
use serde_json::{Value, json};

/// Portal administration calls. Obtained with `client.portals()`.
#[derive(Debug)]
pub struct PortalAdmin<'a, T> {
	client: &'a Client<T>,
}

impl<'a, T> PortalAdmin<'a, T> {
	pub(crate) fn new(client: &'a Client<T>) -> Self {
		Self { client }
	}
}

impl<T: WebTransport> PortalAdmin<'_, T> {
	/// Update the portal. Only `portal_properties` is sent.
	pub async fn update(&self, portal: &Portal, portal_opts: Option<&PortalOptions>) -> Result<Value> {
		let url_path = format!("/portals/{}/update", portal.id);
		self.post(&url_path, portal.to_update_data(), portal_opts).await
	}

	/// Upload a file as a portal resource, keyed by its file name.
	pub async fn upload_resource(&self, file: ResourceFile, portal_opts: Option<&PortalOptions>) -> Result<Value> {
		let ResourceFile {
			name,
			mime_type,
			content,
		} = file;
		let multipart = MultipartBody::new()
			.file("file", name.clone(), mime_type, content)
			.text("text", "null")
			.text("key", name);

		self.client
			.request(
				"/portals/self/addresource",
				RequestOptions::post_multipart(multipart),
				portal_opts,
			)
			.await
	}

	/// Add a text resource.
	pub async fn add_resource(
		&self,
		name: &str,
		content: &str,
		portal_opts: Option<&PortalOptions>,
	) -> Result<Value> {
		let data = json!({
			"key": name,
			"text": content,
		});
		self.post("/portals/self/addresource", data, portal_opts).await
	}

	/// List the portal resources.
	pub async fn resources(&self, portal_opts: Option<&PortalOptions>) -> Result<Value> {
		self.client
			.request("/portals/self/resources", RequestOptions::get(), portal_opts)
			.await
	}

	pub async fn remove_resource(&self, resource_name: &str, portal_opts: Option<&PortalOptions>) -> Result<Value> {
		self.post("/portals/self/removeresource", json!({ "key": resource_name }), portal_opts)
			.await
	}

	/// Paged access to the users of a portal.
	pub async fn users(&self, portal_id: &str, paging: Paging, portal_opts: Option<&PortalOptions>) -> Result<Value> {
		let url_path = format!("/portals/{portal_id}/users");
		let options = RequestOptions::get()
			.with_query("start", paging.start)
			.with_query("num", paging.num);
		self.client.request(&url_path, options, portal_opts).await
	}

	async fn post(&self, url_path: &str, data: Value, portal_opts: Option<&PortalOptions>) -> Result<Value> {
		self.client
			.request(url_path, RequestOptions::post_form(data), portal_opts)
			.await
	}
}
