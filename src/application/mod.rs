//! Application layer - the scaffold use case and its request, config, and ports

pub mod config;
pub mod dto;
pub mod errors;
pub mod scaffold;
pub mod traits;

pub use config::*;
pub use dto::*;
pub use errors::*;
pub use scaffold::*;
pub use traits::*;
