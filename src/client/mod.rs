//! The `Client` is the shared request wrapper every portal and sharing call goes through.

// region:    --- Modules

mod builder;
mod client_impl;
mod client_types;
mod config;
mod request_auth;
mod request_options;

pub use builder::*;
pub use client_impl::check_status_and_parse_json;
pub use client_types::*;
pub use config::*;
pub use request_auth::*;
pub use request_options::*;

// endregion: --- Modules
