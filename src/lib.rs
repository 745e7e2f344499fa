// workflow-diagram library - Frappe workflow to actdiag/Kroki links
// This exposes the pipeline stages for the CLI and for integration tests

pub mod cli;
pub mod config;
pub mod diagram;
pub mod frappe;
pub mod generator;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use config::{ConfigError, FrappeConfig, WorkflowDiagramConfig};
pub use diagram::{decode, encode, render, DiagramUrl, EncodeError, RenderOptions};
pub use frappe::{FrappeClient, FrappeError, WorkflowSource};
pub use generator::{build_diagram, DiagramGenerator, GenerateError, GeneratedDiagram};
pub use telemetry::{create_run_span, generate_correlation_id, init_telemetry};
pub use workflow::{
    group, RoleGroupedView, WorkflowDefinition, WorkflowDocument, WorkflowState,
    WorkflowTransition,
};
