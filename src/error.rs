use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdearioError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Idea no encontrada")]
    NotFound(u64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error de conexión: {0}")]
    Transport(String),

    #[error("{0}")]
    Api(String),
}

impl From<reqwest::Error> for IdearioError {
    fn from(err: reqwest::Error) -> Self {
        IdearioError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IdearioError>;
