use crate::support::{FakeTransport, HOSTNAME, OWNER, TOKEN};
use portal_rest::resolver::{CurrentUser, PortalInfo, Session};
use portal_rest::{Client, ClientConfig};

pub fn seed_session() -> Session {
	Session::new(HOSTNAME)
		.with_token(TOKEN)
		.with_current_user(CurrentUser::new(OWNER).with_role("org_user"))
}

pub fn seed_private_portal_session(hostname: &str, https_port: u16) -> Session {
	Session::new(hostname).with_portal(PortalInfo {
		is_portal: true,
		https_port,
		..Default::default()
	})
}

pub fn seed_client(session: Session, transport: FakeTransport) -> Client<FakeTransport> {
	Client::builder()
		.with_session(session)
		.with_config(ClientConfig::default())
		.with_transport(transport)
		.build()
}
