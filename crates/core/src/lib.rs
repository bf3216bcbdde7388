//! # Airwave Core
//!
//! Domain types, traits, and error definitions for the Airwave
//! orchestration service. This crate has **zero framework dependencies**;
//! it defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every seam is defined here: the [`Provider`] trait that model backends
//! implement, the canonical [`TurnSequence`] handed to them, and the fixed
//! persona and workflow tables the orchestrator reads. Implementations live
//! in their respective crates.

pub mod error;
pub mod message;
pub mod persona;
pub mod provider;
pub mod request;
pub mod workflow;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use message::{Message, Role, TurnSequence};
pub use persona::{FocusArea, ORCHESTRATOR_ID, PERSONAS, PersonaDescriptor, PersonaId, find_persona};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use request::{
    ChatRequest, ChatResponse, DispatchResult, ProviderKind, ResponseKind, StationProfile,
};
pub use workflow::{WORKFLOWS, WorkflowDescriptor, find_workflow};
