use thiserror::Error;

#[derive(Error, Debug)]
pub enum DishmateError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("DishmateError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for DishmateError {
    fn from(error: std::io::Error) -> Self {
        DishmateError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for DishmateError {
    fn from(error: reqwest::Error) -> Self {
        DishmateError::Reqwest(Box::new(error))
    }
}
