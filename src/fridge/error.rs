use thiserror::Error;

#[derive(Error, Debug)]
pub enum FridgeError {
    #[error("{0}")]
    Validation(String),

    #[error("Item not found: {0:03}")]
    NotFound(i64),

    #[error("Persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("incorrect number of arguments")]
    WrongArgCount,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with {status}: {body}")]
    Remote { status: u16, body: String },
}

impl FridgeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, FridgeError>;
