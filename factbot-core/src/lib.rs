//! Fun-fact acquisition and retention for the factbot Telegram bot.
//!
//! This crate provides:
//! - A bounded, file-backed history of delivered facts
//! - A generator that asks a chat model for a fact not in that history
//! - Delivery text formatting for the broadcast, reply, and inline paths
//!
//! # Quick Start
//!
//! ```ignore
//! use factbot_core::{FactGenerator, FactStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = openai::OpenAi::from_env()?;
//!     let mut generator = FactGenerator::new(api, FactStore::new("facts.json"));
//!
//!     let outcome = generator.generate_unique_fact().await?;
//!     if let Some(fact) = outcome.fact() {
//!         println!("{fact}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod delivery;
pub mod generator;
pub mod store;
pub mod testing;

// Primary public API
pub use generator::{CompletionApi, FactGenerator, GenerationOutcome, GeneratorConfig};
pub use store::{FactStore, StoreError, MAX_FACTS};
pub use testing::MockApi;
