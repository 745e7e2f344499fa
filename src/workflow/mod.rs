pub mod grouping;
pub mod types;

pub use grouping::{group, RoleBuckets, RoleGroupedView};
pub use types::{WorkflowDefinition, WorkflowDocument, WorkflowState, WorkflowTransition};
