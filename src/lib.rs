//! Chavruta - bilingual Daf Yomi study-partner service
//!
//! This crate serves a Hebrew/English chat API for discussing the daily
//! Talmud page. It computes which daf is studied on a given date, renders
//! style-specific prompts, and proxies questions to a hosted
//! text-generation provider with retry and response caching.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chavruta::cache::CacheConfig;
//! use chavruta::chat::ChatGenerator;
//! use chavruta::providers::{OpenAiClient, RetryConfig};
//! use chavruta::types::{DafRef, Language, Style};
//!
//! #[tokio::main]
//! async fn main() -> chavruta::Result<()> {
//!     let generator = ChatGenerator::new(
//!         Arc::new(OpenAiClient::new("sk-your-key")),
//!         RetryConfig::default(),
//!         &CacheConfig::default(),
//!     );
//!
//!     let today = chrono::Local::now().date_naive();
//!     let info = chavruta::calendar::daf_info(today)?;
//!
//!     let response = generator
//!         .generate(
//!             Style::Main,
//!             "What is muktzeh?",
//!             &info.daf_ref(),
//!             Language::En,
//!             120,
//!             "gpt-4o",
//!         )
//!         .await?;
//!
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod calendar;
pub mod chat;
pub mod error;
pub mod i18n;
pub mod providers;
pub mod server;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use chat::ChatGenerator;
pub use error::{ChavrutaError, Result};

// Re-export all types
pub use types::{DafInfo, DafRef, GenerateOptions, GenerateResponse, Language, PopularTopics, Style};
