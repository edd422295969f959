//! Infrastructure layer - concrete implementations of domain ports

pub mod content;
pub mod output;
pub mod shell;
pub mod templates;

pub use content::*;
pub use output::*;
pub use shell::*;
pub use templates::*;
