use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::processing::{MatchError, MatchResult};

/// Model used for all embeddings. Its 384-dimension output is a property
/// of the model, not a request parameter; requirement and catalog vectors
/// are only comparable when produced by the same model version.
pub const EMBEDDING_MODEL: EmbeddingModel = EmbeddingModel::AllMiniLML6V2;

/// Maps a batch of texts to one embedding vector per text, same order.
///
/// The seam exists so the pipeline can run against a deterministic stub
/// in tests instead of the real model.
pub trait TextEncoder: Send + Sync {
    fn encode(&self, texts: &[String]) -> MatchResult<Vec<Vec<f32>>>;
}

/// Production encoder backed by a process-wide fastembed model.
///
/// The model is loaded once and shared by every request. `TextEmbedding::embed`
/// needs `&mut self`, so concurrent requests serialize on the mutex for the
/// duration of the forward pass.
pub struct FastembedEncoder {
    model: Mutex<TextEmbedding>,
}

impl FastembedEncoder {
    pub fn new() -> MatchResult<Self> {
        let model = TextEmbedding::try_new(InitOptions::new(EMBEDDING_MODEL))
            .map_err(|error| MatchError::Embedding(format!("model init failed: {error:?}")))?;
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl TextEncoder for FastembedEncoder {
    fn encode(&self, texts: &[String]) -> MatchResult<Vec<Vec<f32>>> {
        let mut model = self
            .model
            .lock()
            .map_err(|_| MatchError::Embedding("embedding model mutex poisoned".to_string()))?;
        model
            .embed(texts.to_vec(), None)
            .map_err(|error| MatchError::Embedding(format!("{error:?}")))
    }
}
