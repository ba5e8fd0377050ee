use thiserror::Error;

pub mod embedding;
pub mod matcher;
pub mod parser;
pub mod similarity;

/// Errors produced by the matching pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    /// No requirement lines could be parsed from the input.
    #[error("No URS points provided")]
    EmptyInput,

    /// The embedding model failed to initialize or run.
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// Requirement and catalog embeddings disagree on vector width.
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

pub type MatchResult<T> = Result<T, MatchError>;
