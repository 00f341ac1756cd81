mod support;

use crate::support::{
	FakeTransport, GROUP_ID, ITEM_ID, OWNER, REST_URL, Result, TOKEN, form_value, query_of, seed_client, seed_session,
};
use portal_rest::Error;
use portal_rest::resolver::{CurrentUser, Session};
use portal_rest::sharing::{Access, ShareResult};
use reqwest::Method;
use serde_json::json;

fn share_url() -> String {
	format!("{REST_URL}/content/users/{OWNER}/items/{ITEM_ID}/share?f=json&token={TOKEN}")
}

// region:    --- Set Access

#[tokio::test]
async fn test_set_access_flags() -> Result<()> {
	let cases = [
		(Some(Access::Everyone), "true", "true"),
		(Some(Access::Org), "true", "false"),
		(None, "false", "false"),
	];

	for (access, org, everyone) in cases {
		let transport = FakeTransport::new().with_json(json!({"notSharedWith": [], "itemId": ITEM_ID}));
		let client = seed_client(seed_session(), transport);

		client.sharing().set_access(OWNER, ITEM_ID, access, None).await?;

		let req = client.transport().last_request().ok_or("no request")?;
		assert_eq!(req.method, Method::POST);
		assert_eq!(req.url, share_url());
		let form = req.body.as_form().ok_or("should be a form body")?;
		assert_eq!(form_value(form, "org").as_deref(), Some(org), "org for {access:?}");
		assert_eq!(form_value(form, "everyone").as_deref(), Some(everyone), "everyone for {access:?}");
		assert_eq!(form_value(form, "items").as_deref(), Some(ITEM_ID));
	}
	Ok(())
}

#[tokio::test]
async fn test_set_access_public_alias() -> Result<()> {
	let transport = FakeTransport::new().with_json(json!({"notSharedWith": []}));
	let client = seed_client(seed_session(), transport);

	let access: Access = "public".parse()?;
	client.sharing().set_access(OWNER, ITEM_ID, Some(access), None).await?;

	let req = client.transport().last_request().ok_or("no request")?;
	let form = req.body.as_form().ok_or("should be a form body")?;
	assert_eq!(form_value(form, "everyone").as_deref(), Some("true"));
	Ok(())
}

#[tokio::test]
async fn test_set_access_non_owner_rejected_without_request() -> Result<()> {
	let session = Session::new("org.maps.arcgis.com")
		.with_token(TOKEN)
		.with_current_user(CurrentUser::new("mallory").with_role("org_user"));
	let client = seed_client(session, FakeTransport::new());

	let err = client
		.sharing()
		.set_access(OWNER, ITEM_ID, Some(Access::Everyone), None)
		.await
		.expect_err("non owner should be rejected");

	assert!(matches!(err, Error::NotOwnerOrAdmin { .. }));
	assert!(err.is_validation());
	assert!(err.to_string().contains("mallory"));
	assert_eq!(client.transport().request_count(), 0);
	Ok(())
}

#[tokio::test]
async fn test_set_access_admin_allowed() -> Result<()> {
	let session = Session::new("org.maps.arcgis.com")
		.with_token(TOKEN)
		.with_current_user(CurrentUser::new("admin").with_role("org_admin"));
	let transport = FakeTransport::new().with_json(json!({"notSharedWith": []}));
	let client = seed_client(session, transport);

	client.sharing().set_access(OWNER, ITEM_ID, Some(Access::Org), None).await?;

	assert_eq!(client.transport().request_count(), 1);
	Ok(())
}

#[tokio::test]
async fn test_set_access_anonymous_rejected() -> Result<()> {
	let client = seed_client(Session::new("org.maps.arcgis.com"), FakeTransport::new());

	let res = client.sharing().set_access(OWNER, ITEM_ID, None, None).await;

	assert!(matches!(res, Err(Error::NotOwnerOrAdmin { username: None, .. })));
	assert_eq!(client.transport().request_count(), 0);
	Ok(())
}

// endregion: --- Set Access

// region:    --- Share With Group

#[tokio::test]
async fn test_share_with_group_already_shared_short_circuits() -> Result<()> {
	let transport = FakeTransport::new().with_json(json!({
		"total": 1,
		"start": 1,
		"num": 10,
		"nextStart": -1,
		"results": [{"id": ITEM_ID, "owner": OWNER, "title": "Parcels"}]
	}));
	let client = seed_client(seed_session(), transport);

	let res = client
		.sharing()
		.share_with_group(OWNER, ITEM_ID, GROUP_ID, false, None)
		.await?;

	assert_eq!(
		res,
		ShareResult {
			item_id: ITEM_ID.to_string(),
			not_shared_with: vec![],
		}
	);
	// only the search, no write
	let requests = client.transport().requests();
	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].method, Method::GET);
	assert!(requests[0].url.starts_with(&format!("{REST_URL}/search?")));
	let query = query_of(&requests[0].url);
	assert_eq!(
		form_value(query, "q"),
		Some(format!("id: {ITEM_ID} AND group: {GROUP_ID}"))
	);
	assert_eq!(form_value(query, "num").as_deref(), Some("10"));
	assert_eq!(form_value(query, "sortField").as_deref(), Some("title"));
	Ok(())
}

#[tokio::test]
async fn test_share_with_group_other_item_in_results_still_shares() -> Result<()> {
	let transport = FakeTransport::new()
		.with_json(json!({"total": 1, "results": [{"id": "someotheritem"}]}))
		.with_json(json!({"notSharedWith": [], "itemId": ITEM_ID}));
	let client = seed_client(seed_session(), transport);

	client
		.sharing()
		.share_with_group(OWNER, ITEM_ID, GROUP_ID, false, None)
		.await?;

	assert_eq!(client.transport().request_count(), 2);
	Ok(())
}

#[tokio::test]
async fn test_share_with_group_writes_with_item_control() -> Result<()> {
	let transport = FakeTransport::new()
		.with_json(json!({"total": 0, "results": []}))
		.with_json(json!({"notSharedWith": [], "itemId": ITEM_ID}));
	let client = seed_client(seed_session(), transport);

	let res = client
		.sharing()
		.share_with_group(OWNER, ITEM_ID, GROUP_ID, true, None)
		.await?;

	assert_eq!(res.item_id, ITEM_ID);
	let req = client.transport().last_request().ok_or("no request")?;
	assert_eq!(req.method, Method::POST);
	assert_eq!(req.url, share_url());
	let form = req.body.as_form().ok_or("should be a form body")?;
	assert_eq!(form_value(form, "groups").as_deref(), Some(GROUP_ID));
	assert_eq!(form_value(form, "items").as_deref(), Some(ITEM_ID));
	assert_eq!(form_value(form, "confirmItemControl").as_deref(), Some("true"));
	Ok(())
}

#[tokio::test]
async fn test_share_with_group_without_item_control() -> Result<()> {
	let transport = FakeTransport::new()
		.with_json(json!({"total": 0, "results": []}))
		.with_json(json!({"notSharedWith": []}));
	let client = seed_client(seed_session(), transport);

	client
		.sharing()
		.share_with_group(OWNER, ITEM_ID, GROUP_ID, false, None)
		.await?;

	let req = client.transport().last_request().ok_or("no request")?;
	let form = req.body.as_form().ok_or("should be a form body")?;
	assert_eq!(form_value(form, "confirmItemControl"), None);
	Ok(())
}

#[tokio::test]
async fn test_share_with_group_not_shared_with_fails() -> Result<()> {
	let transport = FakeTransport::new()
		.with_json(json!({"total": 0, "results": []}))
		.with_json(json!({"notSharedWith": [GROUP_ID], "itemId": ITEM_ID}));
	let client = seed_client(seed_session(), transport);

	let err = client
		.sharing()
		.share_with_group(OWNER, ITEM_ID, GROUP_ID, false, None)
		.await
		.expect_err("partial share should fail");

	assert!(matches!(err, Error::ItemNotShared { .. }));
	let msg = err.to_string();
	assert!(msg.contains(OWNER));
	assert!(msg.contains(ITEM_ID));
	assert!(msg.contains(GROUP_ID));
	Ok(())
}

#[tokio::test]
async fn test_share_with_group_non_owner_rejected_without_request() -> Result<()> {
	let session = Session::new("org.maps.arcgis.com").with_current_user(CurrentUser::new("mallory"));
	let client = seed_client(session, FakeTransport::new());

	let res = client
		.sharing()
		.share_with_group(OWNER, ITEM_ID, GROUP_ID, false, None)
		.await;

	assert!(matches!(res, Err(Error::NotOwnerOrAdmin { .. })));
	assert_eq!(client.transport().request_count(), 0);
	Ok(())
}

// endregion: --- Share With Group

// region:    --- Deprecated

#[tokio::test]
#[allow(deprecated)]
async fn test_deprecated_proxies_set_access() -> Result<()> {
	let transport = FakeTransport::new()
		.with_json(json!({"notSharedWith": []}))
		.with_json(json!({"notSharedWith": []}));
	let client = seed_client(seed_session(), transport);

	client.sharing().share_item_with_everyone(OWNER, ITEM_ID, None).await?;
	client.sharing().share_item_with_org(OWNER, ITEM_ID, None).await?;

	let requests = client.transport().requests();
	let everyone_form = requests[0].body.as_form().ok_or("should be a form body")?;
	let org_form = requests[1].body.as_form().ok_or("should be a form body")?;
	assert_eq!(form_value(everyone_form, "everyone").as_deref(), Some("true"));
	assert_eq!(form_value(org_form, "org").as_deref(), Some("true"));
	assert_eq!(form_value(org_form, "everyone").as_deref(), Some("false"));
	Ok(())
}

#[test]
#[allow(deprecated)]
fn test_disabled_operations_fail() {
	let client = seed_client(seed_session(), FakeTransport::new());
	let sharing = client.sharing();

	for res in [
		sharing.share_items_with_groups(),
		sharing.share_items_with_control(),
		sharing.share_items(),
	] {
		let err = res.expect_err("disabled operation should fail");
		assert!(matches!(err, Error::Deprecated { .. }));
		assert!(err.to_string().contains("Use share_with_group"));
	}
	assert_eq!(client.transport().request_count(), 0);
}

// endregion: --- Deprecated
