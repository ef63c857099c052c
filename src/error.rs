use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Invalid length of {what}: expected {expected}, found {found}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Chain bounds exceeded: start {start} + steps {steps} must be below {chain_len}")]
    ChainBounds {
        start: usize,
        steps: usize,
        chain_len: usize,
    },
    #[error("Failed to decode hex field: {0}")]
    InvalidHex(String),
    #[error("Failed to deserialize test vectors: {0}")]
    Deserialization(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn check_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            tracing::debug!(what, expected, found, "rejecting input of wrong length");
            Err(Error::InvalidLength {
                what,
                expected,
                found,
            })
        }
    }
}

#[cfg(feature = "serialization")]
impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex(e.to_string())
    }
}

#[cfg(feature = "serialization")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Deserialization(e.to_string())
    }
}
