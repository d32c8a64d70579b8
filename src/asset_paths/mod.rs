//! Helpers for normalising, filtering and resolving asset references.
//!
//! Each step lives in its own submodule so the rules for cleaning a raw reference, deciding
//! whether it is a local path at all, and locating it on disk can be tested independently.
//! The checker applies them in that order: normalise, filter, resolve.

mod filters;
mod normalize;
mod relative;
mod resolve;

pub use filters::should_ignore_asset_reference;
pub use normalize::normalize_reference;
pub use relative::display_relative;
pub use resolve::{classify_reference, resolve_reference_path};
