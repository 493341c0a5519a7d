use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokeboxError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    Http { status: u16, url: String },

    #[error("JokeboxError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for JokeboxError {
    fn from(error: std::io::Error) -> Self {
        JokeboxError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for JokeboxError {
    fn from(error: reqwest::Error) -> Self {
        JokeboxError::Reqwest(Box::new(error))
    }
}
