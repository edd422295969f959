//! Data Transfer Objects for application layer

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::DemoProfile;

/// Longest accepted event or trait name
pub const MAX_NAME_LEN: usize = 64;

static PROJECT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid project name regex"));

/// Request to scaffold a demo app
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub profile: DemoProfile,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Skip the template's post-generation commands
    pub skip_install: bool,
}

impl ScaffoldRequest {
    /// Run every check and report the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        let profile = &self.profile;

        let project_name = profile.project_name.trim();
        if project_name.is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }
        if !PROJECT_NAME.is_match(project_name) {
            return Err(ValidationError::InvalidProjectName(
                profile.project_name.clone(),
            ));
        }

        if profile.company_name.trim().is_empty() {
            return Err(ValidationError::MissingField("company_name".to_string()));
        }
        if profile.industry.trim().is_empty() {
            return Err(ValidationError::MissingField("industry".to_string()));
        }

        if let Some(name) = profile.events.iter().find(|name| !is_valid_name(name)) {
            return Err(ValidationError::InvalidEventName(name.clone()));
        }
        if let Some(name) = profile.traits.iter().find(|name| !is_valid_name(name)) {
            return Err(ValidationError::InvalidTraitName(name.clone()));
        }

        let mut seen = HashSet::new();
        if let Some(name) = profile.events.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(ValidationError::DuplicateEventName(name.clone()));
        }

        if !self.template_dir.is_dir() {
            return Err(ValidationError::TemplateDirNotFound(
                self.template_dir.clone(),
            ));
        }

        if self.output_dir.exists() && !is_empty_dir(&self.output_dir) {
            return Err(ValidationError::OutputDirNotEmpty(self.output_dir.clone()));
        }

        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= MAX_NAME_LEN
}

fn is_empty_dir(path: &std::path::Path) -> bool {
    std::fs::read_dir(path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

/// Outcome of a scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldResponse {
    pub template_name: String,
    pub artifacts_count: usize,
    pub output_path: PathBuf,
    pub commands_run: usize,
    pub failed_commands: Vec<String>,
}
