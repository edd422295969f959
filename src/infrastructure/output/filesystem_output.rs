//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::{ApplicationError, OutputService};
use crate::generation::Artifact;

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError> {
        for artifact in artifacts {
            if let Some(parent) = artifact.path.parent() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    ApplicationError::OutputError(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }

            let mut file = fs::File::create(&artifact.path).await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to create file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

            file.write_all(&artifact.content).await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to write file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

            file.flush().await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to flush file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

            #[cfg(unix)]
            if let Some(mode) = artifact.permissions {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&artifact.path, std::fs::Permissions::from_mode(mode))
                    .await
                    .map_err(|e| {
                        ApplicationError::OutputError(format!(
                            "Failed to set permissions on {}: {}",
                            artifact.path.display(),
                            e
                        ))
                    })?;
            }

            tracing::debug!(path = %artifact.path.display(), bytes = artifact.content.len(), "Wrote artifact");
        }

        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        fs::create_dir_all(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })
    }
}
