//! Filesystem-based template loader
//!
//! Loads a template set from a directory, typically given with
//! `--template-dir`. With a manifest, exactly the listed files are loaded.
//! Without one, every file under the directory is part of the set and its
//! kind is decided by the `.tmpl` extension.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::infrastructure::templates::manifest::{MANIFEST_FILE_NAMES, parse_manifest_yaml};
use crate::infrastructure::templates::{
    ManifestFile, TemplateError, TemplateFile, TemplateFileType, TemplateLoader, TemplateManifest,
    TemplateSet, default_destination,
};

/// Directories never treated as part of a template set
const IGNORED_DIRS: [&str; 2] = [".git", "node_modules"];

/// Template loader that reads a template set from the filesystem
pub struct FileSystemTemplateLoader;

impl FileSystemTemplateLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemTemplateLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateLoader for FileSystemTemplateLoader {
    async fn load_template(&self, path: &Path) -> Result<TemplateSet, TemplateError> {
        if !fs::metadata(path).await.is_ok_and(|m| m.is_dir()) {
            return Err(TemplateError::not_found(path.to_string_lossy()));
        }

        let dir_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "template".to_string());

        let manifest = match load_manifest_from_dir(path, &dir_name).await? {
            Some(manifest) => manifest,
            None => {
                tracing::debug!(path = %path.display(), "No manifest found, using directory listing");
                manifest_from_listing(path, &dir_name).await?
            }
        };

        let files = load_template_files(path, &manifest).await?;

        tracing::info!(
            template = %manifest.name,
            files = files.len(),
            "Loaded template set"
        );

        Ok(TemplateSet {
            manifest,
            files,
            source: path.to_path_buf(),
        })
    }
}

/// Load a template manifest from a directory, if it has one
async fn load_manifest_from_dir(
    dir: &Path,
    fallback_name: &str,
) -> Result<Option<TemplateManifest>, TemplateError> {
    for name in MANIFEST_FILE_NAMES {
        let manifest_path = dir.join(name);
        if fs::try_exists(&manifest_path).await? {
            let content = fs::read_to_string(&manifest_path).await?;
            return parse_manifest_yaml(&content, fallback_name).map(Some);
        }
    }
    Ok(None)
}

/// Build a manifest covering every file under `dir`, sorted by path
async fn manifest_from_listing(
    dir: &Path,
    name: &str,
) -> Result<TemplateManifest, TemplateError> {
    let mut sources = Vec::new();
    let mut pending = vec![PathBuf::new()];

    while let Some(relative_dir) = pending.pop() {
        let mut entries = fs::read_dir(dir.join(&relative_dir)).await?;
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().to_string();
            let relative = relative_dir.join(&file_name);
            let file_type = entry.file_type().await?;

            if file_type.is_dir() {
                if !IGNORED_DIRS.contains(&file_name.as_str()) {
                    pending.push(relative);
                }
            } else if file_type.is_file() {
                sources.push(to_manifest_path(&relative));
            }
        }
    }

    sources.sort();

    Ok(TemplateManifest {
        name: name.to_string(),
        files: sources
            .into_iter()
            .map(|source| ManifestFile {
                destination: default_destination(&source),
                file_type: TemplateFileType::from_source(&source),
                source,
            })
            .collect(),
        ..Default::default()
    })
}

/// Manifest paths always use `/`
fn to_manifest_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Load all template files referenced in the manifest
async fn load_template_files(
    dir: &Path,
    manifest: &TemplateManifest,
) -> Result<Vec<TemplateFile>, TemplateError> {
    let mut files = Vec::with_capacity(manifest.files.len());

    for manifest_file in &manifest.files {
        let file_path = dir.join(&manifest_file.source);
        let contents = fs::read(&file_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TemplateError::invalid_manifest(format!(
                    "listed file does not exist: {}",
                    manifest_file.source
                ))
            } else {
                TemplateError::IoError(e)
            }
        })?;

        files.push(TemplateFile {
            source: PathBuf::from(&manifest_file.source),
            destination: manifest_file.destination.clone(),
            contents,
            file_type: manifest_file.file_type,
        });
    }

    Ok(files)
}
