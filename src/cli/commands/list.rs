use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::commands::{connect, Command};
use crate::config::WorkflowDiagramConfig;
use crate::frappe::WorkflowSource;
use crate::generator::DiagramGenerator;

pub struct ListCommand {
    config: WorkflowDiagramConfig,
}

impl ListCommand {
    pub fn new(config: WorkflowDiagramConfig) -> Self {
        Self { config }
    }

    pub async fn run<S: WorkflowSource, W: Write>(
        &self,
        generator: &DiagramGenerator<S>,
        out: &mut W,
    ) -> Result<usize> {
        let names = generator
            .list_workflows()
            .await
            .context("Failed to list workflows")?;

        if names.is_empty() {
            writeln!(out, "📋 No workflows found on {}", self.config.frappe.base_url)?;
            return Ok(0);
        }

        for name in &names {
            writeln!(out, "{name}")?;
        }
        Ok(names.len())
    }
}

impl Command for ListCommand {
    async fn execute(&self) -> Result<()> {
        let generator = connect(&self.config)?;
        let count = self.run(&generator, &mut std::io::stdout()).await?;
        tracing::debug!(count, "Listed workflows");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frappe::FrappeError;
    use crate::workflow::WorkflowDocument;
    use async_trait::async_trait;

    struct StaticSource(Vec<String>);

    #[async_trait]
    impl WorkflowSource for StaticSource {
        async fn fetch_workflow_names(&self) -> Result<Vec<String>, FrappeError> {
            Ok(self.0.clone())
        }

        async fn fetch_workflow(&self, _name: &str) -> Result<WorkflowDocument, FrappeError> {
            Ok(WorkflowDocument::default())
        }
    }

    #[tokio::test]
    async fn test_lists_one_name_per_line() {
        let generator = DiagramGenerator::new(
            StaticSource(vec!["Leave Approval".to_string(), "Purchase Order".to_string()]),
            "kroki.io",
        );
        let mut out = Vec::new();

        let count = ListCommand::new(WorkflowDiagramConfig::default())
            .run(&generator, &mut out)
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Leave Approval\nPurchase Order\n");
    }

    #[tokio::test]
    async fn test_empty_catalog_prints_notice() {
        let generator = DiagramGenerator::new(StaticSource(vec![]), "kroki.io");
        let mut out = Vec::new();

        let count = ListCommand::new(WorkflowDiagramConfig::default())
            .run(&generator, &mut out)
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert!(String::from_utf8(out).unwrap().contains("No workflows found"));
    }
}
