use serde::{Deserialize, Serialize};

/// A single state of a Frappe workflow and the role allowed to edit documents in it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowState {
    #[serde(rename = "state", default)]
    pub name: String,
    /// Empty when no role is assigned
    #[serde(rename = "allow_edit", default)]
    pub authorized_role: String,
}

impl WorkflowState {
    pub fn new(name: &str, authorized_role: &str) -> Self {
        Self {
            name: name.to_string(),
            authorized_role: authorized_role.to_string(),
        }
    }
}

/// A transition between two workflow states, triggered by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowTransition {
    #[serde(rename = "state", default)]
    pub from_state: String,
    #[serde(rename = "next_state", default)]
    pub to_state: String,
    #[serde(default)]
    pub action: String,
    #[serde(rename = "allowed", default)]
    pub authorized_role: String,
}

impl WorkflowTransition {
    pub fn new(from_state: &str, to_state: &str, action: &str, authorized_role: &str) -> Self {
        Self {
            from_state: from_state.to_string(),
            to_state: to_state.to_string(),
            action: action.to_string(),
            authorized_role: authorized_role.to_string(),
        }
    }
}

/// One named workflow record as returned by `frappe.desk.form.load.getdoc`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub states: Vec<WorkflowState>,
    #[serde(default)]
    pub transitions: Vec<WorkflowTransition>,
}

/// The full `getdoc` payload. A document may carry several definitions,
/// their states and transitions are treated as one flat workflow.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowDocument {
    #[serde(default)]
    pub docs: Vec<WorkflowDefinition>,
}

impl WorkflowDocument {
    pub fn states(&self) -> impl Iterator<Item = &WorkflowState> {
        self.docs.iter().flat_map(|doc| doc.states.iter())
    }

    pub fn transitions(&self) -> impl Iterator<Item = &WorkflowTransition> {
        self.docs.iter().flat_map(|doc| doc.transitions.iter())
    }

    pub fn state_count(&self) -> usize {
        self.docs.iter().map(|doc| doc.states.len()).sum()
    }

    pub fn transition_count(&self) -> usize {
        self.docs.iter().map(|doc| doc.transitions.len()).sum()
    }
}
