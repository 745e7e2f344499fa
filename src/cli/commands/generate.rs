use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::cli::commands::{connect, Command};
use crate::cli::prompt::{print_menu, select_workflow};
use crate::config::WorkflowDiagramConfig;
use crate::diagram::RenderOptions;
use crate::frappe::WorkflowSource;
use crate::generator::{DiagramGenerator, GeneratedDiagram};

pub struct GenerateCommand {
    config: WorkflowDiagramConfig,
    workflow: Option<String>,
    print_source: bool,
    render_options: RenderOptions,
}

impl GenerateCommand {
    pub fn new(config: WorkflowDiagramConfig) -> Self {
        Self {
            config,
            workflow: None,
            print_source: false,
            render_options: RenderOptions::default(),
        }
    }

    pub fn with_workflow(mut self, workflow: Option<String>) -> Self {
        self.workflow = workflow;
        self
    }

    pub fn with_print_source(mut self, print_source: bool) -> Self {
        self.print_source = print_source;
        self
    }

    pub fn with_escaped_quotes(mut self, escape_quotes: bool) -> Self {
        self.render_options = self.render_options.with_escaped_quotes(escape_quotes);
        self
    }

    /// Pick a workflow (menu unless one was given), generate its diagram and
    /// write the result to `out`.
    pub async fn run<S, R, W>(
        &self,
        generator: &DiagramGenerator<S>,
        input: &mut R,
        out: &mut W,
    ) -> Result<GeneratedDiagram>
    where
        S: WorkflowSource,
        R: BufRead,
        W: Write,
    {
        let workflow = match &self.workflow {
            Some(name) => name.clone(),
            None => {
                let names = generator
                    .list_workflows()
                    .await
                    .context("Failed to list workflows")?;
                print_menu(&names, out)?;
                select_workflow(&names, input, out)?
            }
        };

        tracing::info!(workflow = %workflow, "Generating diagram");
        let diagram = generator
            .generate_with(&workflow, self.render_options)
            .await
            .with_context(|| format!("Failed to generate diagram for workflow '{workflow}'"))?;

        if self.print_source {
            writeln!(out, "{}", diagram.source)?;
            writeln!(out)?;
        }
        writeln!(out, "🔗 Please click the following URL:")?;
        writeln!(out, "{}", diagram.url)?;
        out.flush()?;

        Ok(diagram)
    }
}

impl Command for GenerateCommand {
    async fn execute(&self) -> Result<()> {
        let generator = connect(&self.config)?;
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut out = std::io::stdout();

        self.run(&generator, &mut input, &mut out).await?;
        Ok(())
    }
}
