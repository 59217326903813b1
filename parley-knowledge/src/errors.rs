#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("content is empty")]
    EmptyContent,
    #[error("invalid Q&A pair (expected `question?: answer`): {0}")]
    InvalidQaPair(String),
    #[error("{kind} entries are not supported by the {format} format")]
    UnsupportedKind { kind: String, format: String },
    #[error("unknown content kind: {0}")]
    UnknownKind(String),
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;
