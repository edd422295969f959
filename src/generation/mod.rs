//! Generation domain module
//!
//! Builds the data context for a demo and renders a template set into
//! artifacts through the template engine.

pub mod context;
pub mod errors;
pub mod orchestrator;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use errors::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
