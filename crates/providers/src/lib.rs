//! LLM provider implementations for Airwave.
//!
//! Both providers implement the `airwave_core::Provider` trait.
//! The dispatcher selects one per request.

pub mod anthropic;
pub mod dispatcher;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use dispatcher::{ProviderDispatcher, ProviderSlot, build_from_config};
pub use openai::OpenAiProvider;
