//! Remote backend: drives the REST API over HTTP.

use serde::Deserialize;

use crate::entity::Idea;
use crate::error::{IdearioError, Result};
use crate::storage::{IdeaPatch, NewIdea};

/// The response envelope produced by the HTTP binding.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    data: Option<serde_json::Value>,
    message: Option<String>,
}

#[derive(Debug)]
pub struct RemoteBackend {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Idea>> {
        let response = self.http.get(self.ideas_url()).send().await?;
        let data = unwrap_data(response.json().await?)?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn get(&self, id: u64) -> Result<Idea> {
        let response = self.http.get(self.idea_url(id)).send().await?;
        into_idea(response).await
    }

    pub async fn create(&self, new: &NewIdea) -> Result<Idea> {
        let response = self.http.post(self.ideas_url()).json(new).send().await?;
        into_idea(response).await
    }

    pub async fn update(&self, id: u64, patch: &IdeaPatch) -> Result<Idea> {
        let response = self.http.put(self.idea_url(id)).json(patch).send().await?;
        into_idea(response).await
    }

    pub async fn delete(&self, id: u64) -> Result<Idea> {
        let response = self.http.delete(self.idea_url(id)).send().await?;
        into_idea(response).await
    }

    fn ideas_url(&self) -> String {
        format!("{}/api/ideas", self.base_url)
    }

    fn idea_url(&self, id: u64) -> String {
        format!("{}/api/ideas/{}", self.base_url, id)
    }
}

async fn into_idea(response: reqwest::Response) -> Result<Idea> {
    let data = unwrap_data(response.json().await?)?;
    Ok(serde_json::from_value(data)?)
}

/// Surface the server's own message when it rejected the call.
fn unwrap_data(envelope: Envelope) -> Result<serde_json::Value> {
    if !envelope.success {
        return Err(IdearioError::Api(
            envelope
                .message
                .unwrap_or_else(|| "Error desconocido".to_string()),
        ));
    }
    envelope
        .data
        .ok_or_else(|| IdearioError::Api("Respuesta sin datos".to_string()))
}
