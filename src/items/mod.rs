//! Item search, as used by the sharing pre-checks.

// region:    --- Modules

mod items_search;

pub use items_search::*;

// endregion: --- Modules
