/// Why a record or the collection failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationReason {
    #[error("is missing")]
    Missing,
    #[error("has the wrong type, expected {expected}")]
    WrongType { expected: &'static str },
    #[error("must not be empty")]
    Empty,
    #[error("must be greater than zero")]
    NotPositive,
    #[error("must be a finite number")]
    NotFinite,
    #[error("duplicates id '{0}'")]
    Duplicate(String),
    #[error("exceeds the limit of {limit} records")]
    TooMany { limit: usize },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed dataset: {0}")]
    MalformedFormat(String),

    #[error("invalid dataset: {} {reason}", site(.index, .field))]
    Validation { index: Option<usize>, field: String, reason: ValidationReason },

    #[error("request superseded by a newer load")]
    Superseded,
}

fn site(index: &Option<usize>, field: &str) -> String {
    match index {
        Some(i) => format!("record {} field '{}'", i, field),
        None => format!("field '{}'", field),
    }
}

impl LoadError {
    pub fn validation(index: Option<usize>, field: impl Into<String>, reason: ValidationReason) -> Self {
        LoadError::Validation { index, field: field.into(), reason }
    }

    /// Only transport failures can succeed on a plain retry.
    pub fn is_retryable(&self) -> bool { matches!(self, LoadError::Network(_)) }

    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "network",
            LoadError::MalformedFormat(_) => "malformed_format",
            LoadError::Validation { .. } => "validation",
            LoadError::Superseded => "superseded",
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            LoadError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            LoadError::Validation { index, .. } => *index,
            _ => None,
        }
    }
}
