#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Article not found: {0}")]
    ArticleNotFound(String),
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
