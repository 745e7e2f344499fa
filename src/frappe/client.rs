use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::errors::FrappeError;
use super::types::WorkflowCatalog;
use crate::config::FrappeConfig;
use crate::workflow::WorkflowDocument;

pub const WORKFLOW_DOCTYPE: &str = "Workflow";
const LIST_METHOD: &str = "/api/method/frappe.desk.reportview.get";
const GETDOC_METHOD: &str = "/api/method/frappe.desk.form.load.getdoc";

/// Where workflow definitions come from, so the pipeline can run against a fake
#[async_trait]
pub trait WorkflowSource: Send + Sync {
    /// Names of every workflow the caller may read
    async fn fetch_workflow_names(&self) -> Result<Vec<String>, FrappeError>;

    /// Full definition of one workflow, states and transitions included
    async fn fetch_workflow(&self, name: &str) -> Result<WorkflowDocument, FrappeError>;
}

/// Minimal client for the Frappe desk API, authenticated with an API key pair
#[derive(Debug, Clone)]
pub struct FrappeClient {
    http: reqwest::Client,
    base_url: String,
    authorization: String,
}

impl FrappeClient {
    pub fn new(config: &FrappeConfig) -> Result<Self, FrappeError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FrappeError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization: config.authorization(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, method_path: &str) -> String {
        format!("{}{}", self.base_url, method_path)
    }

    async fn read_json<T: DeserializeOwned>(
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FrappeError> {
        let response = request.send().await.map_err(|source| FrappeError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FrappeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FrappeError::Transport {
            url: url.to_string(),
            source,
        })?;
        debug!(url, bytes = body.len(), "Received Frappe response");

        serde_json::from_str(&body).map_err(|source| FrappeError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl WorkflowSource for FrappeClient {
    async fn fetch_workflow_names(&self) -> Result<Vec<String>, FrappeError> {
        let url = self.endpoint(LIST_METHOD);
        let form = Form::new().text("doctype", WORKFLOW_DOCTYPE);

        let request = self
            .http
            .post(&url)
            .header(AUTHORIZATION, &self.authorization)
            .multipart(form);

        let catalog: WorkflowCatalog = Self::read_json(&url, request).await?;
        let names = catalog.names();
        info!(count = names.len(), "Fetched workflow catalog");
        Ok(names)
    }

    async fn fetch_workflow(&self, name: &str) -> Result<WorkflowDocument, FrappeError> {
        let url = self.endpoint(GETDOC_METHOD);

        let request = self
            .http
            .get(&url)
            .query(&[("doctype", WORKFLOW_DOCTYPE), ("name", name)])
            .header(ACCEPT, "*/*")
            .header(AUTHORIZATION, &self.authorization);

        let document: WorkflowDocument = Self::read_json(&url, request).await?;
        info!(
            workflow = name,
            states = document.state_count(),
            transitions = document.transition_count(),
            "Fetched workflow definition"
        );
        Ok(document)
    }
}
