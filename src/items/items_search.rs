use crate::resolver::PortalOptions;
use crate::webc::WebTransport;
use crate::{Client, RequestOptions, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// region:    --- Types

/// A `/search` query. Defaults to the first 10 results sorted by title.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
	pub q: String,
	pub start: u32,
	pub num: u32,
	pub sort_field: Option<String>,
}

impl SearchQuery {
	pub fn new(q: impl Into<String>) -> Self {
		Self {
			q: q.into(),
			start: 1,
			num: 10,
			sort_field: Some("title".to_string()),
		}
	}

	pub fn with_paging(mut self, start: u32, num: u32) -> Self {
		self.start = start;
		self.num = num;
		self
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
	#[serde(default)]
	pub total: u64,
	#[serde(default)]
	pub start: i64,
	#[serde(default)]
	pub num: i64,
	/// `-1` when there is no next page.
	#[serde(default)]
	pub next_start: i64,
	#[serde(default)]
	pub results: Vec<ItemSummary>,
}

impl SearchResult {
	pub fn contains_item(&self, item_id: &str) -> bool {
		self.results.iter().any(|item| item.id == item_id)
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemSummary {
	pub id: String,
	#[serde(default)]
	pub owner: Option<String>,
	#[serde(default)]
	pub title: Option<String>,
	#[serde(flatten)]
	pub other: Map<String, Value>,
}

// endregion: --- Types

/// Item calls. Obtained with `client.items()`.
#[derive(Debug)]
pub struct Items<'a, T> {
	client: &'a Client<T>,
}

impl<'a, T> Items<'a, T> {
	pub(crate) fn new(client: &'a Client<T>) -> Self {
		Self { client }
	}
}

impl<T: WebTransport> Items<'_, T> {
	pub async fn search(&self, query: &SearchQuery, portal_opts: Option<&PortalOptions>) -> Result<SearchResult> {
		let mut options = RequestOptions::get()
			.with_query("q", &query.q)
			.with_query("start", query.start)
			.with_query("num", query.num);
		if let Some(sort_field) = &query.sort_field {
			options = options.with_query("sortField", sort_field);
		}

		let json = self.client.request("/search", options, portal_opts).await?;
		Ok(serde_json::from_value(json)?)
	}
}
