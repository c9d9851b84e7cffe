use std::io;
use std::net::SocketAddr;

use crate::api::{self, AppState};
use crate::client::{BackendConfig, IdeaClient};
use crate::entity::{category_label, Idea};
use crate::error::{IdearioError, Result};
use crate::storage::{IdeaPatch, IdeaStore};

use super::commands::{BackendArgs, BackendKind};

const DEFAULT_PORT: u16 = 5000;

fn client_for(args: &BackendArgs) -> IdeaClient {
    let config = match args.backend {
        BackendKind::Remote => BackendConfig::Remote {
            base_url: args.api_url.clone(),
        },
        BackendKind::Local => BackendConfig::Local {
            path: args.data_file.clone(),
        },
    };
    IdeaClient::new(config)
}

fn print_idea(idea: &Idea) {
    println!("  #{} [{}] {}", idea.id, idea.status, idea.title);
    println!("      {}", idea.description);
    println!(
        "      {} | {}",
        category_label(&idea.category),
        idea.created_at.format("%Y-%m-%d %H:%M")
    );
}

pub async fn handle_serve(port: Option<u16>, debug: bool) -> Result<()> {
    let port = port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT);

    let state = AppState::new(IdeaStore::seeded(), debug);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    api::serve(addr, state).await
}

pub async fn handle_list(backend: BackendArgs, json: bool) -> Result<()> {
    let mut client = client_for(&backend);
    client.refresh().await?;

    let ideas = client.ideas();
    if json {
        println!("{}", serde_json::to_string_pretty(ideas)?);
    } else if ideas.is_empty() {
        println!("No tienes ideas guardadas aún. ¡Crea tu primera idea!");
    } else {
        println!("Ideas:\n");
        for idea in ideas {
            print_idea(idea);
        }
    }

    Ok(())
}

pub async fn handle_get(id: u64, backend: BackendArgs, json: bool) -> Result<()> {
    let mut client = client_for(&backend);
    let idea = client.get(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&idea)?);
    } else {
        println!("Idea #{}", idea.id);
        println!("Título: {}", idea.title);
        println!("Descripción: {}", idea.description);
        println!("Categoría: {}", category_label(&idea.category));
        println!("Estado: {}", idea.status);
        println!("Creada: {}", idea.created_at.format("%Y-%m-%d %H:%M"));
        if let Some(updated_at) = idea.updated_at {
            println!("Actualizada: {}", updated_at.format("%Y-%m-%d %H:%M"));
        }
    }

    Ok(())
}

pub async fn handle_add(
    title: String,
    description: String,
    category: Option<String>,
    backend: BackendArgs,
    json: bool,
) -> Result<()> {
    let mut client = client_for(&backend);
    let idea = client
        .create(&title, &description, category.as_deref())
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&idea)?);
    } else {
        println!("¡Idea guardada exitosamente!");
        print_idea(&idea);
    }

    Ok(())
}

pub async fn handle_update(
    id: u64,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    status: Option<String>,
    backend: BackendArgs,
    json: bool,
) -> Result<()> {
    let mut client = client_for(&backend);
    let patch = IdeaPatch {
        title,
        description,
        category,
        status,
    };
    let idea = client.update(id, patch).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&idea)?);
    } else {
        println!("Idea actualizada exitosamente");
        print_idea(&idea);
    }

    Ok(())
}

pub async fn handle_delete(id: u64, force: bool, backend: BackendArgs) -> Result<()> {
    let mut client = client_for(&backend);
    let idea = client.get(id).await?;

    // Confirm deletion unless --force is used
    if !force {
        eprintln!(
            "¿Estás seguro de que quieres eliminar \"{}\"? [y/N] ",
            idea.title
        );

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelado.");
                return Ok(());
            }
        } else {
            // Non-interactive mode without --force, abort
            return Err(IdearioError::InvalidInput(
                "Usa --force para eliminar en modo no interactivo".to_string(),
            ));
        }
    }

    client.delete(id).await?;
    println!("Idea eliminada");

    Ok(())
}
