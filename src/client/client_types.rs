use crate::resolver::Session;
use crate::webc::WebClient;
use crate::{ClientBuilder, ClientConfig, Error, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The portal client. Cheap to clone, all clones share the same session.
///
/// `T` is the transport; the default `WebClient` goes through reqwest.
#[derive(Debug)]
pub struct Client<T = WebClient> {
	pub(super) inner: Arc<ClientInner<T>>,
}

impl<T> Clone for Client<T> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

// region:    --- Client Constructors

impl Client {
	/// Client on the default reqwest transport.
	pub fn new(session: Session) -> Self {
		ClientBuilder::default().with_session(session).build()
	}

	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}
}

// endregion: --- Client Constructors

// region:    --- Client Getters

impl<T> Client<T> {
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	pub fn transport(&self) -> &T {
		&self.inner.transport
	}

	/// Snapshot of the current session.
	pub fn session(&self) -> Result<Session> {
		Ok(self.session_read()?.clone())
	}

	/// Replace the session (e.g., after sign-in or sign-out).
	pub fn set_session(&self, session: Session) -> Result<()> {
		*self.session_write()? = session;
		Ok(())
	}

	pub(crate) fn session_read(&self) -> Result<RwLockReadGuard<'_, Session>> {
		self.inner
			.session
			.read()
			.map_err(|e| Error::SessionLockPoisoned(e.to_string()))
	}

	pub(crate) fn session_write(&self) -> Result<RwLockWriteGuard<'_, Session>> {
		self.inner
			.session
			.write()
			.map_err(|e| Error::SessionLockPoisoned(e.to_string()))
	}
}

// endregion: --- Client Getters

// region:    --- ClientInner

#[derive(Debug)]
pub(super) struct ClientInner<T> {
	pub(super) transport: T,
	pub(super) config: ClientConfig,
	pub(super) session: RwLock<Session>,
}

// endregion: --- ClientInner
