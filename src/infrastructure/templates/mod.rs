//! Template set loading

pub mod errors;
pub mod filesystem_loader;
pub mod manifest;
pub mod traits;
pub mod types;

pub use errors::*;
pub use filesystem_loader::*;
pub use traits::*;
pub use types::*;
