use std::fmt;

/// Result type for onoma-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// The dataset file could not be read
    Io(std::io::Error),

    /// The dataset content could not be parsed
    Csv(csv::Error),

    /// The dataset parsed but contained zero admitted records
    EmptyDataset,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "failed to read dataset: {}", err),
            Error::Csv(err) => write!(f, "failed to parse dataset: {}", err),
            Error::EmptyDataset => write!(f, "no data found in the dataset"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::EmptyDataset => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
