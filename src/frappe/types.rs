use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `frappe.desk.reportview.get` for the Workflow doctype.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowCatalog {
    #[serde(default)]
    pub message: CatalogMessage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogMessage {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl WorkflowCatalog {
    /// One workflow name per row, the row's cells concatenated.
    pub fn names(&self) -> Vec<String> {
        self.message
            .values
            .iter()
            .map(|row| row.iter().map(cell_text).collect::<String>())
            .collect()
    }
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
