//! Item sharing: access level (private, org, everyone) and group sharing.

// region:    --- Modules

mod access;
mod sharing_impl;

pub use access::*;
pub use sharing_impl::*;

// endregion: --- Modules
