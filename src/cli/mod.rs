mod commands;
mod handlers;

pub use commands::{BackendArgs, BackendKind, Cli, Commands};
pub use handlers::{
    handle_add, handle_delete, handle_get, handle_list, handle_serve, handle_update,
};
