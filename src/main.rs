//! demogen CLI entrypoint
//! Parses command-line arguments and dispatches to the scaffold use case.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use demogen::application::{API_KEY_ENV, ScaffoldConfig, ScaffoldRequest, ScaffoldUseCase};
use demogen::engine::{TemplateEngine, render};
use demogen::generation::{ContentGenerator, DataContext, DemoProfile, GenerationOrchestrator};
use demogen::infrastructure::{
    FileContentGenerator, FileSystemOutputService, FileSystemTemplateLoader, GeneratorConfig,
    HttpContentGenerator, ShellCommandExecutor, StaticContentGenerator,
};
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "demogen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a demo web app from a template directory
    Scaffold {
        /// Package name of the generated app (lowercase, digits, '-' and '_')
        #[arg(long)]
        project_name: String,
        /// Company the demo is built for
        #[arg(long)]
        company: String,
        /// Industry of the company
        #[arg(long)]
        industry: String,
        /// Tracked event name (repeatable)
        #[arg(long = "event")]
        events: Vec<String>,
        /// User trait name (repeatable)
        #[arg(long = "trait")]
        traits: Vec<String>,
        /// Template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Output directory for the generated app
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// JSON or YAML file with pre-generated content
        #[arg(long, conflicts_with = "generator_url")]
        content: Option<PathBuf>,
        /// Content generation service endpoint
        #[arg(long)]
        generator_url: Option<Url>,
        /// Do not run the template's dependency install commands
        #[arg(long)]
        skip_install: bool,
        /// Config file (defaults to ./demogen.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Render a single template file to stdout
    Render {
        /// Template file
        template: PathBuf,
        /// JSON or YAML data file
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

/// Scaffold parameters from CLI
struct ScaffoldParams {
    profile: DemoProfile,
    template_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    content: Option<PathBuf>,
    generator_url: Option<Url>,
    skip_install: bool,
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `render` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scaffold {
            project_name,
            company,
            industry,
            events,
            traits,
            template_dir,
            output_dir,
            content,
            generator_url,
            skip_install,
            config,
        } => {
            run_scaffold(ScaffoldParams {
                profile: DemoProfile {
                    project_name,
                    company_name: company,
                    industry,
                    events,
                    traits,
                },
                template_dir,
                output_dir,
                content,
                generator_url,
                skip_install,
                config,
            })
            .await?
        }
        Commands::Render { template, data } => run_render(template, data).await?,
    }
    Ok(())
}

async fn run_scaffold(params: ScaffoldParams) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("Failed to read working directory")?;
    let config = ScaffoldConfig::discover(params.config.as_deref(), &working_dir)
        .await
        .context("Failed to load configuration")?;

    let template_dir = params
        .template_dir
        .or_else(|| config.template_dir.clone())
        .context("No template directory given (use --template-dir or set template_dir in demogen.toml)")?;

    let output_dir = params
        .output_dir
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| working_dir.clone())
        .join(&params.profile.project_name);

    let content_generator = build_content_generator(params.content, params.generator_url, &config)?;

    let use_case = ScaffoldUseCase::new(
        Arc::new(FileSystemTemplateLoader::new()),
        content_generator,
        Arc::new(GenerationOrchestrator::new(Arc::new(TemplateEngine::new()))),
        Arc::new(FileSystemOutputService::new()),
        Arc::new(ShellCommandExecutor::new()),
    );

    info!(
        project_name = %params.profile.project_name,
        template_dir = %template_dir.display(),
        "Scaffolding demo app"
    );

    let response = use_case
        .execute(ScaffoldRequest {
            profile: params.profile,
            template_dir,
            output_dir,
            skip_install: params.skip_install || config.skip_install,
        })
        .await
        .context("Failed to scaffold demo app")?;

    for command in &response.failed_commands {
        warn!("Post-generation command failed: {}", command);
    }

    println!(
        "✅ Generated {} file(s) from template '{}' in {}",
        response.artifacts_count,
        response.template_name,
        response.output_path.display()
    );
    if !response.failed_commands.is_empty() {
        println!(
            "⚠️  {} of {} setup command(s) failed; run them manually in the output directory",
            response.failed_commands.len(),
            response.commands_run
        );
    }

    Ok(())
}

/// Choose where generated content comes from: a data file, a service
/// endpoint from the CLI or config, or the built-in defaults
fn build_content_generator(
    content: Option<PathBuf>,
    generator_url: Option<Url>,
    config: &ScaffoldConfig,
) -> anyhow::Result<Arc<dyn ContentGenerator>> {
    if let Some(path) = content {
        return Ok(Arc::new(FileContentGenerator::new(path)));
    }

    let generator_config = match (generator_url, config.generator.clone()) {
        (Some(url), Some(mut from_file)) => {
            from_file.endpoint = url;
            Some(from_file)
        }
        (Some(url), None) => Some(GeneratorConfig::new(url)),
        (None, from_file) => from_file,
    };

    match generator_config {
        Some(mut generator_config) => {
            generator_config.api_key = std::env::var(API_KEY_ENV).ok();
            let generator = HttpContentGenerator::new(generator_config)
                .context("Failed to create content generator client")?;
            Ok(Arc::new(generator))
        }
        None => Ok(Arc::new(StaticContentGenerator::new())),
    }
}

async fn run_render(template: PathBuf, data: Option<PathBuf>) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(&template)
        .await
        .with_context(|| format!("Failed to read template {}", template.display()))?;

    let context = match data {
        Some(path) => DataContext::from_file(&path)
            .await
            .with_context(|| format!("Failed to load data from {}", path.display()))?,
        None => DataContext::new(),
    };

    print!("{}", render(&text, &context.into_value()));
    Ok(())
}
