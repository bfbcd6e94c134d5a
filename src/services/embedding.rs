//! Local text-embedding engine.
//!
//! The dashboard's maintenance-note similarity search runs on a locally
//! cached MiniLM model via fastembed. The check-embedder binary exercises
//! this module as a dependency smoke test.

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::error::{AppError, AppResult};

/// Model used for maintenance-note similarity.
const EMBEDDING_MODEL: EmbeddingModel = EmbeddingModel::AllMiniLML6V2;

/// Human-readable model name for console output.
pub const MODEL_NAME: &str = "all-MiniLM-L6-v2";

/// Sentence embedded by the smoke test.
pub const PROBE_SENTENCE: &str = "drilling fluid pressure anomaly on rig 7";

/// Engine for generating text embeddings using a local transformer model.
pub struct EmbeddingEngine {
    model: TextEmbedding,
}

impl EmbeddingEngine {
    /// Create a new embedding engine, downloading the model on first use.
    pub fn new() -> AppResult<Self> {
        let options = InitOptions::new(EMBEDDING_MODEL).with_show_download_progress(false);

        let model = TextEmbedding::try_new(options)
            .map_err(|e| AppError::Embedding(format!("Failed to load embedding model: {}", e)))?;

        Ok(Self { model })
    }

    /// Generate embeddings for a batch of texts.
    pub fn embed(&mut self, texts: Vec<String>) -> AppResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        self.model
            .embed(texts, None)
            .map_err(|e| AppError::Embedding(format!("Embedding generation failed: {}", e)))
    }

    /// Embed the fixed probe sentence and return its dimensionality.
    pub fn probe(&mut self) -> AppResult<usize> {
        let vectors = self.embed(vec![PROBE_SENTENCE.to_string()])?;
        let dims = vectors.first().map(|v| v.len()).unwrap_or(0);
        Ok(dims)
    }
}
