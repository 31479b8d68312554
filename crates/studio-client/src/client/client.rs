use crate::{ClientError, ClientResult};

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use studio_core::{Inquiry, NewProject, Project};

/// HTTP client for the studio backend API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend base URL (e.g., "https://api.atelier.example")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send a request where success is the HTTP status alone; the response
    /// body, if any, is not consumed.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("backend returned {}", status);
            return Err(ClientError::status(status.as_u16()));
        }

        Ok(())
    }

    /// Submit a contact inquiry: POST /api/contacts.
    pub async fn submit_contact(&self, inquiry: &Inquiry) -> ClientResult<()> {
        debug!("submitting contact inquiry");
        let req = self.request(Method::POST, "/api/contacts").json(inquiry);
        self.execute(req).await
    }

    /// Fetch the portfolio listing: GET /api/projects.
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        debug!("fetching project listing");
        let req = self.request(Method::GET, "/api/projects");

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("project listing returned {}", status);
            return Err(ClientError::status(status.as_u16()));
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        Ok(Self::extract_items(&body))
    }

    /// Persist a new project: POST /api/projects. The response body is not
    /// consumed; callers re-fetch the listing instead.
    pub async fn create_project(&self, record: &NewProject) -> ClientResult<()> {
        debug!("creating project \"{}\"", record.title);
        let req = self.request(Method::POST, "/api/projects").json(record);
        self.execute(req).await
    }

    /// Defensive extraction of the `items` collection. An absent or
    /// non-array field yields an empty list, and elements that fail to
    /// deserialize are skipped; a malformed payload never crashes rendering.
    fn extract_items(body: &Value) -> Vec<Project> {
        let Some(items) = body.get("items").and_then(Value::as_array) else {
            warn!("project listing body has no items array");
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| match serde_json::from_value(item.clone()) {
                Ok(project) => Some(project),
                Err(e) => {
                    warn!("skipping malformed project record: {}", e);
                    None
                }
            })
            .collect()
    }
}
