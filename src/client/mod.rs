//! Dual-mode idea client.
//!
//! [`IdeaClient`] keeps an in-memory view of the idea collection and applies
//! user actions through one of two interchangeable backends, chosen once at
//! construction and never switched mid-session. The remote strategy talks to
//! the REST API and re-fetches the full list after every mutation; the local
//! strategy owns the data directly and persists it to a JSON file after
//! every mutation. Both enforce the same input validation, so the observable
//! behavior is identical; only the storage differs.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use std::path::PathBuf;

use crate::entity::Idea;
use crate::error::{IdearioError, Result};
use crate::storage::{IdeaPatch, NewIdea};

/// Backing strategy, selected explicitly at construction.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    Remote { base_url: String },
    Local { path: PathBuf },
}

#[derive(Debug)]
enum Backend {
    Remote(RemoteBackend),
    Local(LocalBackend),
}

#[derive(Debug)]
pub struct IdeaClient {
    backend: Backend,
    ideas: Vec<Idea>,
}

impl IdeaClient {
    pub fn new(config: BackendConfig) -> Self {
        let backend = match config {
            BackendConfig::Remote { base_url } => Backend::Remote(RemoteBackend::new(base_url)),
            BackendConfig::Local { path } => Backend::Local(LocalBackend::open(path)),
        };
        Self {
            backend,
            ideas: Vec::new(),
        }
    }

    /// Current in-memory view, newest first.
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Re-load the view from the backend. On failure the previous view is
    /// left untouched.
    pub async fn refresh(&mut self) -> Result<()> {
        let ideas = match &mut self.backend {
            Backend::Remote(remote) => remote.list().await?,
            Backend::Local(local) => local.list(),
        };
        self.ideas = ideas;
        Ok(())
    }

    pub async fn get(&mut self, id: u64) -> Result<Idea> {
        match &mut self.backend {
            Backend::Remote(remote) => remote.get(id).await,
            Backend::Local(local) => local.get(id),
        }
    }

    /// Validate and submit a new idea.
    ///
    /// Title and description that trim to empty abort before any backend
    /// call; no mutation happens in that case.
    pub async fn create(
        &mut self,
        title: &str,
        description: &str,
        category: Option<&str>,
    ) -> Result<Idea> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(IdearioError::InvalidInput(
                "Por favor completa todos los campos".to_string(),
            ));
        }

        let new = NewIdea {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            category: category.map(|c| c.to_string()),
        };

        let idea = match &mut self.backend {
            Backend::Remote(remote) => {
                let idea = remote.create(&new).await?;
                refetch_view(remote, &mut self.ideas).await;
                idea
            }
            Backend::Local(local) => {
                let idea = local.create(new)?;
                self.ideas = local.list();
                idea
            }
        };

        Ok(idea)
    }

    pub async fn update(&mut self, id: u64, patch: IdeaPatch) -> Result<Idea> {
        let idea = match &mut self.backend {
            Backend::Remote(remote) => {
                let idea = remote.update(id, &patch).await?;
                refetch_view(remote, &mut self.ideas).await;
                idea
            }
            Backend::Local(local) => {
                let idea = local.update(id, patch)?;
                self.ideas = local.list();
                idea
            }
        };

        Ok(idea)
    }

    /// Delete an idea. Asking the user for confirmation is the caller's
    /// concern; once called, the deletion goes through.
    pub async fn delete(&mut self, id: u64) -> Result<Idea> {
        let idea = match &mut self.backend {
            Backend::Remote(remote) => {
                let idea = remote.delete(id).await?;
                refetch_view(remote, &mut self.ideas).await;
                idea
            }
            Backend::Local(local) => {
                let idea = local.delete(id)?;
                self.ideas = local.list();
                idea
            }
        };

        Ok(idea)
    }
}

/// Full re-fetch after a remote mutation, no optimistic update. A failed
/// fetch keeps the previous view in place.
async fn refetch_view(remote: &RemoteBackend, view: &mut Vec<Idea>) {
    match remote.list().await {
        Ok(ideas) => *view = ideas,
        Err(err) => tracing::warn!("no se pudo recargar la lista: {}", err),
    }
}
