//! End-to-end diagram generation
//!
//! Runs the fetch → group → render → encode pipeline for one workflow over
//! any [`WorkflowSource`]. Selection of the workflow is left to the caller.

use thiserror::Error;
use tracing::{info, instrument};

use crate::diagram::{encode, render, DiagramUrl, EncodeError, RenderOptions};
use crate::frappe::{FrappeError, WorkflowSource};
use crate::workflow::{group, WorkflowDocument};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to fetch workflow")]
    Fetch(#[from] FrappeError),

    #[error("Cannot generate diagram URL")]
    Encode(#[from] EncodeError),
}

/// Output of one run: the actdiag text and the shareable link for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDiagram {
    pub workflow: String,
    pub source: String,
    pub url: DiagramUrl,
}

/// Group, render and encode an already fetched document.
pub fn build_diagram(
    workflow: &str,
    document: &WorkflowDocument,
    options: RenderOptions,
    render_host: &str,
) -> Result<GeneratedDiagram, EncodeError> {
    let view = group(document);
    let source = render(&view, options);
    let token = encode(&source)?;

    Ok(GeneratedDiagram {
        workflow: workflow.to_string(),
        source,
        url: DiagramUrl::new(render_host, token),
    })
}

pub struct DiagramGenerator<S> {
    source: S,
    render_host: String,
    options: RenderOptions,
}

impl<S: WorkflowSource> DiagramGenerator<S> {
    pub fn new(source: S, render_host: &str) -> Self {
        Self {
            source,
            render_host: render_host.to_string(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn list_workflows(&self) -> Result<Vec<String>, GenerateError> {
        Ok(self.source.fetch_workflow_names().await?)
    }

    pub async fn generate(&self, workflow: &str) -> Result<GeneratedDiagram, GenerateError> {
        self.generate_with(workflow, self.options).await
    }

    /// Like [`generate`](Self::generate), rendering with `options` instead of
    /// the generator's own.
    #[instrument(skip(self, options))]
    pub async fn generate_with(
        &self,
        workflow: &str,
        options: RenderOptions,
    ) -> Result<GeneratedDiagram, GenerateError> {
        let document = self.source.fetch_workflow(workflow).await?;
        let diagram = build_diagram(workflow, &document, options, &self.render_host)?;

        info!(
            source_bytes = diagram.source.len(),
            token_bytes = diagram.url.token().len(),
            "Generated diagram URL"
        );
        Ok(diagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::decode;
    use crate::workflow::{WorkflowDefinition, WorkflowState, WorkflowTransition};
    use async_trait::async_trait;

    struct FakeSource {
        document: WorkflowDocument,
    }

    #[async_trait]
    impl WorkflowSource for FakeSource {
        async fn fetch_workflow_names(&self) -> Result<Vec<String>, FrappeError> {
            Ok(vec!["Approval".to_string()])
        }

        async fn fetch_workflow(&self, _name: &str) -> Result<WorkflowDocument, FrappeError> {
            Ok(self.document.clone())
        }
    }

    fn approval_document() -> WorkflowDocument {
        WorkflowDocument {
            docs: vec![WorkflowDefinition {
                name: "Approval".to_string(),
                states: vec![
                    WorkflowState::new("Draft", "Manager"),
                    WorkflowState::new("Approved", "Manager"),
                ],
                transitions: vec![WorkflowTransition::new("Draft", "Approved", "approve", "Manager")],
            }],
        }
    }

    #[tokio::test]
    async fn test_generate_produces_decodable_kroki_url() {
        let generator = DiagramGenerator::new(
            FakeSource {
                document: approval_document(),
            },
            "kroki.io",
        );

        assert_eq!(generator.list_workflows().await.unwrap(), vec!["Approval"]);

        let diagram = generator.generate("Approval").await.unwrap();
        assert_eq!(diagram.workflow, "Approval");
        assert!(diagram.url.to_string().starts_with("https://kroki.io/actdiag/svg/"));
        assert_eq!(decode(diagram.url.token()).unwrap(), diagram.source);
        assert!(diagram.source.contains("lane \"Manager\" {"));
        assert!(diagram
            .source
            .contains("\t\"Draft\" -> \"Approved\" [label = \"approve\"]"));
    }

    #[tokio::test]
    async fn test_render_options_are_applied() {
        let mut document = approval_document();
        document.docs[0].states.push(WorkflowState::new("\"Odd\"", "Manager"));

        let generator = DiagramGenerator::new(FakeSource { document }, "kroki.io")
            .with_render_options(RenderOptions::default().with_escaped_quotes(true));

        let diagram = generator.generate("Approval").await.unwrap();
        assert!(diagram.source.contains("\t\"\\\"Odd\\\"\"\n"));
    }

    #[test]
    fn test_build_diagram_for_empty_document() {
        let diagram = build_diagram(
            "Empty",
            &WorkflowDocument::default(),
            RenderOptions::default(),
            "kroki.io",
        )
        .unwrap();
        assert_eq!(diagram.source, "actdiag {\n}");
    }
}
