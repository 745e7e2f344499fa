use std::collections::HashMap;

use super::types::{WorkflowDocument, WorkflowTransition};

/// Values bucketed by role name, keeping roles in the order they were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBuckets<T> {
    buckets: Vec<(String, Vec<T>)>,
    index: HashMap<String, usize>,
}

impl<T> Default for RoleBuckets<T> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> RoleBuckets<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: &str, value: T) {
        match self.index.get(role) {
            Some(&position) => self.buckets[position].1.push(value),
            None => {
                self.index.insert(role.to_string(), self.buckets.len());
                self.buckets.push((role.to_string(), vec![value]));
            }
        }
    }

    pub fn get(&self, role: &str) -> Option<&[T]> {
        self.index
            .get(role)
            .map(|&position| self.buckets[position].1.as_slice())
    }

    /// Iterate `(role, values)` pairs in first-seen role order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.buckets
            .iter()
            .map(|(role, values)| (role.as_str(), values.as_slice()))
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(role, _)| role.as_str())
    }

    /// Number of distinct roles
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of values across every role
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, values)| values.len()).sum()
    }
}

/// States and transitions of one workflow, partitioned by authorized role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleGroupedView {
    pub states_by_role: RoleBuckets<String>,
    pub transitions_by_role: RoleBuckets<WorkflowTransition>,
}

impl RoleGroupedView {
    pub fn is_empty(&self) -> bool {
        self.states_by_role.is_empty() && self.transitions_by_role.is_empty()
    }
}

/// Partition every state and transition of `document` into the bucket of its
/// authorized role. Unassigned records land in the `""` bucket.
pub fn group(document: &WorkflowDocument) -> RoleGroupedView {
    let mut view = RoleGroupedView::default();

    for state in document.states() {
        view.states_by_role
            .push(&state.authorized_role, state.name.clone());
    }

    for transition in document.transitions() {
        view.transitions_by_role
            .push(&transition.authorized_role, transition.clone());
    }

    tracing::debug!(
        roles = view.states_by_role.len(),
        states = view.states_by_role.total(),
        transitions = view.transitions_by_role.total(),
        "Grouped workflow by role"
    );

    view
}
