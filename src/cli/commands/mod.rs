use crate::config::WorkflowDiagramConfig;
use crate::frappe::FrappeClient;
use crate::generator::DiagramGenerator;
use anyhow::{Context, Result};

pub mod decode;
pub mod generate;
pub mod list;

pub use decode::DecodeCommand;
pub use generate::GenerateCommand;
pub use list::ListCommand;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Build a generator backed by the Frappe site named in `config`
pub fn connect(config: &WorkflowDiagramConfig) -> Result<DiagramGenerator<FrappeClient>> {
    let client = FrappeClient::new(&config.frappe)
        .with_context(|| format!("Failed to create Frappe client for {}", config.frappe.base_url))?;

    Ok(DiagramGenerator::new(client, &config.diagram.render_host))
}
