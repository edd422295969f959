//! Use case for scaffolding a demo app

use std::sync::Arc;

use crate::application::{ApplicationError, OutputService, ScaffoldRequest, ScaffoldResponse};
use crate::generation::{ContentGenerator, DataContext, GenerationOrchestrator};
use crate::infrastructure::{CommandExecutor, TemplateLoader};

/// Validates the request, builds the data context, renders the template
/// set, writes it out, and installs dependencies
pub struct ScaffoldUseCase {
    template_loader: Arc<dyn TemplateLoader>,
    content_generator: Arc<dyn ContentGenerator>,
    generation_orchestrator: Arc<GenerationOrchestrator>,
    output_service: Arc<dyn OutputService>,
    command_executor: Arc<dyn CommandExecutor>,
}

impl ScaffoldUseCase {
    pub fn new(
        template_loader: Arc<dyn TemplateLoader>,
        content_generator: Arc<dyn ContentGenerator>,
        generation_orchestrator: Arc<GenerationOrchestrator>,
        output_service: Arc<dyn OutputService>,
        command_executor: Arc<dyn CommandExecutor>,
    ) -> Self {
        Self {
            template_loader,
            content_generator,
            generation_orchestrator,
            output_service,
            command_executor,
        }
    }

    pub async fn execute(
        &self,
        request: ScaffoldRequest,
    ) -> Result<ScaffoldResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Load template set
        let template = self
            .template_loader
            .load_template(&request.template_dir)
            .await?;

        // 3. Data context: manifest defaults < profile < generated content
        let mut context = DataContext::from_value(serde_json::Value::Object(
            template.manifest.variables.clone(),
        ))?;
        context.merge(request.profile.to_context());
        let generated = self.content_generator.generate(&request.profile).await?;
        context.merge(generated);

        tracing::debug!(
            project_name = %request.profile.project_name,
            variables = context.len(),
            "Built data context"
        );

        // 4. Render
        let result = self.generation_orchestrator.generate(&template, &context)?;

        // 5. Write under the output directory
        self.output_service
            .ensure_directory(&request.output_dir)
            .await?;

        let mut artifacts = result.artifacts;
        for artifact in &mut artifacts {
            artifact.path = request.output_dir.join(&artifact.path);
        }
        self.output_service.write_artifacts(&artifacts).await?;

        tracing::info!(
            project_name = %request.profile.project_name,
            output_dir = %request.output_dir.display(),
            files = artifacts.len(),
            "Wrote scaffolded files"
        );

        // 6. Install dependencies; failures are reported, not fatal
        let mut commands_run = 0;
        let mut failed_commands = Vec::new();
        if request.skip_install {
            if !result.post_generate.is_empty() {
                tracing::info!("Skipping {} post-generation command(s)", result.post_generate.len());
            }
        } else {
            for command in &result.post_generate {
                tracing::info!(
                    project_name = %request.profile.project_name,
                    command = %command,
                    "Executing post-generation command"
                );
                commands_run += 1;

                match self
                    .command_executor
                    .execute(command, &request.output_dir)
                    .await
                {
                    Ok(output) if output.succeeded() => {
                        if !output.stdout.is_empty() {
                            tracing::debug!(command = %command, output = %output.stdout, "Setup command output");
                        }
                    }
                    Ok(output) => {
                        tracing::error!(
                            command = %command,
                            exit_code = ?output.exit_code,
                            stderr = %output.stderr,
                            "Post-generation command failed"
                        );
                        failed_commands.push(command.clone());
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to execute post-generation command");
                        failed_commands.push(command.clone());
                    }
                }
            }
        }

        Ok(ScaffoldResponse {
            template_name: template.manifest.name,
            artifacts_count: artifacts.len(),
            output_path: request.output_dir,
            commands_run,
            failed_commands,
        })
    }
}
