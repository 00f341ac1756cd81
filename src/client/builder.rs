use crate::client::ClientInner;
use crate::resolver::Session;
use crate::webc::WebClient;
use crate::{Client, ClientConfig};
use std::sync::{Arc, RwLock};

/// The builder for the `Client` structure.
///
/// - `ClientBuilder::default()` uses the reqwest `WebClient` transport
/// - `with_transport(..)` swaps the transport (and the client type parameter)
#[derive(Debug, Default)]
pub struct ClientBuilder<T = WebClient> {
	transport: T,
	config: Option<ClientConfig>,
	session: Option<Session>,
}

/// Builder methods
impl<T> ClientBuilder<T> {
	pub fn with_session(mut self, session: Session) -> Self {
		self.session = Some(session);
		self
	}

	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn with_transport<U>(self, transport: U) -> ClientBuilder<U> {
		ClientBuilder {
			transport,
			config: self.config,
			session: self.session,
		}
	}

	/// Build a new immutable Client.
	/// Without a session, the client starts anonymous with an empty portal hostname.
	pub fn build(self) -> Client<T> {
		let inner = ClientInner {
			transport: self.transport,
			config: self.config.unwrap_or_default(),
			session: RwLock::new(self.session.unwrap_or_default()),
		};
		Client { inner: Arc::new(inner) }
	}
}
