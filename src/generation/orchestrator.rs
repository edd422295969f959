//! Generation orchestration - turns a template set and a data context into artifacts

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::engine::TemplateRenderer;
use crate::generation::{Artifact, DataContext, GenerationError, GenerationResult};
use crate::infrastructure::templates::{TemplateFileType, TemplateSet};

/// Renders every file of a template set
pub struct GenerationOrchestrator {
    renderer: Arc<dyn TemplateRenderer>,
}

impl GenerationOrchestrator {
    pub fn new(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Render destinations, template contents, and post-generation commands.
    ///
    /// Static files are passed through untouched. Destinations are rendered
    /// too, so `src/{{project_slug}}.js` is a valid manifest entry, but the
    /// result must stay inside the output directory.
    pub fn generate(
        &self,
        template: &TemplateSet,
        context: &DataContext,
    ) -> Result<GenerationResult, GenerationError> {
        let data = context.to_value();
        let mut artifacts = Vec::with_capacity(template.files.len());

        for file in &template.files {
            let destination = self.renderer.render(&file.destination, &data);
            let path = safe_relative_path(&destination)?;

            let content = match file.file_type {
                TemplateFileType::Template => {
                    let text = std::str::from_utf8(&file.contents).map_err(|_| {
                        GenerationError::InvalidEncoding(file.source.display().to_string())
                    })?;
                    self.renderer.render(text, &data).into_bytes()
                }
                TemplateFileType::Static => file.contents.clone(),
            };

            let mut artifact = Artifact::new(path, content);
            artifact.permissions = executable_permissions(&artifact);

            tracing::debug!(
                source = %file.source.display(),
                destination = %artifact.path.display(),
                "Rendered template file"
            );
            artifacts.push(artifact);
        }

        let post_generate = template
            .manifest
            .post_generate
            .iter()
            .map(|command| self.renderer.render(command, &data))
            .collect();

        Ok(GenerationResult {
            artifacts,
            post_generate,
        })
    }
}

/// Accept only plain relative paths: no root, no prefix, no `..`
fn safe_relative_path(destination: &str) -> Result<PathBuf, GenerationError> {
    let path = Path::new(destination);
    let has_normal = path
        .components()
        .any(|component| matches!(component, Component::Normal(_)));
    let all_safe = path
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

    if has_normal && all_safe {
        Ok(path.to_path_buf())
    } else {
        Err(GenerationError::UnsafePath(destination.to_string()))
    }
}

/// Scripts are made executable: `.sh` files and anything with a shebang
fn executable_permissions(artifact: &Artifact) -> Option<u32> {
    let is_script = artifact
        .path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "sh");

    if is_script || artifact.content.starts_with(b"#!") {
        Some(0o755)
    } else {
        None
    }
}
