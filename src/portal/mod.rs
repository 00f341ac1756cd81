//! Portal administration: portal properties, portal resources, and users.

// region:    --- Modules

mod portal_admin;
mod portal_types;

pub use portal_admin::*;
pub use portal_types::*;

// endregion: --- Modules
