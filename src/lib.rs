//! `portal-rest` is a thin client for the ArcGIS Portal REST API.
//!
//! - `Client` resolves the portal base URL and token, encodes bodies, and normalizes
//!   the "200 OK with an error payload" responses into `Error::PortalApplication`.
//! - `client.portals()` exposes the portal administration calls (properties, resources, users).
//! - `client.sharing()` exposes item sharing (access level, groups).

// region:    --- Modules

mod client;
mod error;

pub mod items;
pub mod portal;
pub mod resolver;
pub mod sharing;
pub mod webc;

// -- Flatten
pub use client::*;
pub use error::{Error, Result};

// endregion: --- Modules
