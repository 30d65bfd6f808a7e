//! Property directory: listing records consulted by the request lifecycle.

pub mod directory;
pub mod domain;

pub use directory::PropertyDirectory;
pub use domain::{Property, PropertyId};
