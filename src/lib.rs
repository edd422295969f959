//! demogen - scaffold demo web applications from templates
//!
//! The heart of the crate is [`engine`], a small templating language with
//! dotted-path placeholders and single-level array sections. The other
//! modules wire it into a scaffolding workflow: a demo profile and generated
//! content form the data context, a template set is rendered against it, and
//! the result is written to disk.
#![deny(unsafe_code)]

pub mod application;
pub mod engine;
pub mod generation;
pub mod infrastructure;

pub use engine::{TemplateEngine, TemplateRenderer, render};
