use crate::items::{Items, SearchQuery};
use crate::resolver::PortalOptions;
use crate::sharing::Access;
use crate::webc::WebTransport;
use crate::{Client, Error, RequestOptions, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;
use value_ext::JsonValueExt;

// region:    --- ShareResult

/// Result of a share call, as returned by the portal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResult {
	#[serde(default)]
	pub item_id: String,
	#[serde(default)]
	pub not_shared_with: Vec<String>,
}

// endregion: --- ShareResult

/// Item sharing calls. Obtained with `client.sharing()`.
///
/// Every write is refused locally unless the session user owns the item or is an org admin.
#[derive(Debug)]
pub struct Sharing<'a, T> {
	client: &'a Client<T>,
}

impl<'a, T> Sharing<'a, T> {
	pub(crate) fn new(client: &'a Client<T>) -> Self {
		Self { client }
	}

	fn ensure_owner_or_admin(&self, owner: &str, item_id: &str) -> Result<()> {
		let session = self.client.session_read()?;
		let username = session.username();
		if username == Some(owner) || session.is_admin() {
			return Ok(());
		}
		Err(Error::NotOwnerOrAdmin {
			username: username.map(ToString::to_string),
			owner: owner.to_string(),
			item_id: item_id.to_string(),
		})
	}
}

impl<T: WebTransport> Sharing<'_, T> {
	/// Set the access of an item. `None` is private.
	pub async fn set_access(
		&self,
		owner: &str,
		item_id: &str,
		access: Option<Access>,
		portal_opts: Option<&PortalOptions>,
	) -> Result<Value> {
		self.ensure_owner_or_admin(owner, item_id)?;

		let (org, everyone) = Access::share_flags(access);
		let data = json!({
			"items": item_id,
			"f": "json",
			"org": org,
			"everyone": everyone,
		});
		self.post(&share_path(owner, item_id), data, portal_opts).await
	}

	/// Share an item with a group, optionally with item control.
	///
	/// When the item is already visible in the group, no write is issued and an empty
	/// `ShareResult` is returned. The check can miss when the caller cannot see the group,
	/// in which case the share call is simply made.
	pub async fn share_with_group(
		&self,
		owner: &str,
		item_id: &str,
		group_id: &str,
		confirm_item_control: bool,
		portal_opts: Option<&PortalOptions>,
	) -> Result<ShareResult> {
		self.ensure_owner_or_admin(owner, item_id)?;

		if self.is_item_shared_with_group(item_id, group_id, portal_opts).await? {
			return Ok(ShareResult {
				item_id: item_id.to_string(),
				not_shared_with: Vec::new(),
			});
		}

		let mut data = json!({
			"items": item_id,
			"f": "json",
			"groups": group_id,
		});
		if confirm_item_control {
			data.x_insert("confirmItemControl", true)?;
		}

		let json = self.post(&share_path(owner, item_id), data, portal_opts).await?;
		let result: ShareResult = serde_json::from_value(json)?;
		if !result.not_shared_with.is_empty() {
			let err = Error::ItemNotShared {
				owner: owner.to_string(),
				item_id: item_id.to_string(),
				group_id: group_id.to_string(),
			};
			warn!("{err}");
			return Err(err);
		}

		Ok(result)
	}

	/// True if a search for the item within the group returns the item itself.
	pub async fn is_item_shared_with_group(
		&self,
		item_id: &str,
		group_id: &str,
		portal_opts: Option<&PortalOptions>,
	) -> Result<bool> {
		let query = SearchQuery::new(format!("id: {item_id} AND group: {group_id}"));
		let search_result = Items::new(self.client).search(&query, portal_opts).await?;
		Ok(search_result.total > 0 && search_result.contains_item(item_id))
	}

	async fn post(&self, url_path: &str, data: Value, portal_opts: Option<&PortalOptions>) -> Result<Value> {
		self.client
			.request(url_path, RequestOptions::post_form(data), portal_opts)
			.await
	}
}

// region:    --- Deprecated

impl<T: WebTransport> Sharing<'_, T> {
	#[deprecated(note = "use `set_access(owner, item_id, Some(Access::Everyone), ..)`")]
	pub async fn share_item_with_everyone(
		&self,
		owner: &str,
		item_id: &str,
		portal_opts: Option<&PortalOptions>,
	) -> Result<Value> {
		self.set_access(owner, item_id, Some(Access::Everyone), portal_opts).await
	}

	#[deprecated(note = "use `set_access(owner, item_id, Some(Access::Org), ..)`")]
	pub async fn share_item_with_org(
		&self,
		owner: &str,
		item_id: &str,
		portal_opts: Option<&PortalOptions>,
	) -> Result<Value> {
		self.set_access(owner, item_id, Some(Access::Org), portal_opts).await
	}
}

impl<T> Sharing<'_, T> {
	/// Disabled. Always fails.
	#[deprecated(note = "use `share_with_group(owner, item_id, group_id, confirm_item_control, ..)`")]
	pub fn share_items_with_groups(&self) -> Result<Value> {
		Err(Error::Deprecated {
			operation: "share_items_with_groups",
			replacement: "share_with_group(owner, item_id, group_id, confirm_item_control)",
		})
	}

	/// Disabled. Always fails.
	#[deprecated(note = "use `share_with_group(owner, item_id, group_id, confirm_item_control, ..)`")]
	pub fn share_items_with_control(&self) -> Result<Value> {
		Err(Error::Deprecated {
			operation: "share_items_with_control",
			replacement: "share_with_group(owner, item_id, group_id, confirm_item_control)",
		})
	}

	/// Disabled. Always fails.
	#[deprecated(note = "use `share_with_group(..)` or `set_access(..)`")]
	pub fn share_items(&self) -> Result<Value> {
		Err(Error::Deprecated {
			operation: "share_items",
			replacement: "share_with_group(..) or set_access(..)",
		})
	}
}

// endregion: --- Deprecated

fn share_path(owner: &str, item_id: &str) -> String {
	format!("/content/users/{owner}/items/{item_id}/share")
}
