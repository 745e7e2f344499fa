pub mod client;
pub mod errors;
pub mod types;

pub use client::{FrappeClient, WorkflowSource, WORKFLOW_DOCTYPE};
pub use errors::FrappeError;
pub use types::WorkflowCatalog;
