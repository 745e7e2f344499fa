use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::Instrument;

use workflow_diagram::cli::commands::{Command, DecodeCommand, GenerateCommand, ListCommand};
use workflow_diagram::cli::{Cli, Commands};
use workflow_diagram::telemetry::{create_run_span, generate_correlation_id, init_telemetry};
use workflow_diagram::WorkflowDiagramConfig;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_telemetry(&cli.log_level, cli.json_logs)?;

    let command = cli.command.clone().unwrap_or_default();
    let correlation_id = generate_correlation_id();
    let span = create_run_span(command.name(), &correlation_id);

    let result = tokio::runtime::Runtime::new()?.block_on(run(&cli, command).instrument(span));
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!(correlation.id = %correlation_id, "{e:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(cli: &Cli, command: Commands) -> Result<()> {
    let config = if command.needs_config() {
        Some(
            WorkflowDiagramConfig::load(&cli.env_file)
                .with_context(|| format!("Error loading {}", cli.env_file.display()))?,
        )
    } else {
        None
    };

    match (command, config) {
        (
            Commands::Generate {
                workflow,
                print_source,
                escape_quotes,
            },
            Some(config),
        ) => {
            GenerateCommand::new(config)
                .with_workflow(workflow)
                .with_print_source(print_source)
                .with_escaped_quotes(escape_quotes)
                .execute()
                .await
        }
        (Commands::List, Some(config)) => ListCommand::new(config).execute().await,
        (Commands::Decode { token }, _) => DecodeCommand::new(&token).execute().await,
        (command, None) => anyhow::bail!("Command '{}' requires configuration", command.name()),
    }
}
