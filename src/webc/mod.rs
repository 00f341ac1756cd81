//! The `webc` module holds the transport boundary: the request descriptor the client builds,
//! the `WebTransport` trait that sends it, and the reqwest-backed `WebClient`.

// region:    --- Modules

mod error;
mod form;
mod web_client;
mod web_request;

pub use error::{Error, Result};
pub use form::*;
pub use web_client::*;
pub use web_request::*;

// endregion: --- Modules
