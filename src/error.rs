use thiserror::Error;

#[derive(Error, Debug)]
pub enum I915Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Query response truncated: need {needed} bytes, got {got}")]
    TruncatedQuery { needed: usize, got: usize },

    #[error("Unknown debug event type: {0}")]
    UnknownEventType(u32),

    #[error("Debug event truncated: need {needed} bytes, got {got}")]
    TruncatedEvent { needed: usize, got: usize },
}

// A convenient alias
pub type I915Result<T> = Result<T, I915Error>;
