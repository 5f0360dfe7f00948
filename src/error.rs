use thiserror::Error;

#[derive(Error, Debug)]
pub enum CgpaError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("course sheet parse error: {0}")]
    SheetParse(String),

    #[error("invalid course: {0}")]
    InvalidCourse(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CgpaError>;
