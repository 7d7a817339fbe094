use std::future::Future;

use crate::codec::EncodedImage;

pub mod gemini;

pub use gemini::GeminiGenerator;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("The model did not return a valid image. Try adjusting the instruction.")]
    MissingImage,
    #[error("Failed to generate architectural image: {0}")]
    Request(String),
}

/// Seam between the workflow and the external generation service. The real
/// implementation is [`GeminiGenerator`]; tests drive the workflow with mocks.
pub trait ImageGenerator: Send + Sync {
    /// Renders a new image from the source image and instruction text,
    /// returned as a `data:<mime>;base64,<payload>` URL.
    fn generate(
        &self,
        image: &EncodedImage,
        instruction: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}
