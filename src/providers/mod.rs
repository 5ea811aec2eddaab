//! Text-generation providers and retry decoration.

pub mod openai;
pub mod retry;
pub mod traits;

pub use openai::OpenAiClient;
pub use retry::{RetryConfig, RetryingTextProvider};
pub use traits::TextProvider;
