use clap::Parser;
use ideario::cli::{
    handle_add, handle_delete, handle_get, handle_list, handle_serve, handle_update, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, debug } => handle_serve(port, debug).await,
        Commands::List { backend, json } => handle_list(backend, json).await,
        Commands::Get { id, backend, json } => handle_get(id, backend, json).await,
        Commands::Add {
            title,
            description,
            category,
            backend,
            json,
        } => handle_add(title, description, category, backend, json).await,
        Commands::Update {
            id,
            title,
            description,
            category,
            status,
            backend,
            json,
        } => handle_update(id, title, description, category, status, backend, json).await,
        Commands::Delete { id, force, backend } => handle_delete(id, force, backend).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
