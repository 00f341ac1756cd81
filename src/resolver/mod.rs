//! Resolution of "where" and "as whom" a portal call goes:
//! the portal `Endpoint` (from the session or a per-call `PortalOptions`) and the token.

// region:    --- Modules

mod endpoint;
mod host;
mod portal_options;
mod session;

pub use endpoint::*;
pub use host::*;
pub use portal_options::*;
pub use session::*;

// endregion: --- Modules
