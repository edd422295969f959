//! Template engine
//!
//! A deliberately small templating language used to turn the scaffold's
//! template files into output files:
//!
//! - `{{path.to.value}}` is replaced by the value found by walking the data
//!   context one key at a time. Unresolved placeholders are left in place.
//! - `{{#items}} ... {{/items}}` repeats its body once per element of the
//!   `items` sequence. Inside the body `{{.}}` is the element itself and, for
//!   mapping elements, `{{key}}` is the element's own property. Sections over
//!   anything but a sequence render as nothing.
//!
//! Sections are expanded before placeholders are substituted, but only
//! template text goes through substitution. Text that came from a data
//! value, whether an element, an element property, or a placeholder value,
//! is emitted as is and never scanned for markers, so `{{#o}}{{k}}{{/o}}`
//! with `k = "{{n}}"` renders `{{n}}` even when `n` is defined.
//!
//! Sections do not nest. Rendering is pure and never fails.

pub mod render;
pub mod resolve;

pub use render::render;
pub use resolve::{resolve_path, stringify};

use serde_json::Value;

/// Renders template text against a data context
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `data` as the root scope
    fn render(&self, template: &str, data: &Value) -> String;
}

/// The built-in engine
#[derive(Debug, Clone, Copy)]
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TemplateEngine {
    fn render(&self, template: &str, data: &Value) -> String {
        render(template, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_engine_as_trait_object() {
        let renderer: Arc<dyn TemplateRenderer> = Arc::new(TemplateEngine::new());
        let data = json!({"company": {"name": "Acme"}});

        assert_eq!(
            renderer.render("Welcome to {{company.name}}", &data),
            "Welcome to Acme"
        );
    }

    #[test]
    fn test_engine_concurrent_renders() {
        let engine = TemplateEngine::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let data = json!({"n": i, "items": [i, i]});
                    engine.render("{{n}}:{{#items}}{{.}}{{/items}}", &data)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("{i}:{i}{i}"));
        }
    }
}
