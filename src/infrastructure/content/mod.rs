//! Content generator implementations
//!
//! Generated content is whatever the templates need beyond the profile
//! fields: taglines, a product catalogue, feature lists. It can come from
//! built-in defaults, a data file, or an HTTP text-generation service.

pub mod file_generator;
pub mod http_generator;
pub mod static_generator;

pub use file_generator::*;
pub use http_generator::*;
pub use static_generator::*;
