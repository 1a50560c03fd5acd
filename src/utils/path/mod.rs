//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`route`]: page route helpers (`route_to_fragment_path`, `split_path_fragment`)

pub mod route;

pub use route::route_to_fragment_path;
