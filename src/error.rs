use std::fmt;

#[derive(Debug)]
pub enum ConvertError {
    // Input validation errors
    InvalidFormat(String),

    // CLI / export errors
    Io(std::io::Error),
    Serialization(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            ConvertError::Io(e) => write!(f, "I/O error: {}", e),
            ConvertError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

// Conversions
impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
