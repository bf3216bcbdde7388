//! The public radio orchestrator.
//!
//! Every chat message passes through the same pipeline:
//!
//! 1. **Parse** `*` commands and answer them from templates
//! 2. **Route** simple help-seeking text to a canned suggestion
//! 3. **Classify** complexity and pick a context budget
//! 4. **Assemble** framework text under that budget
//! 5. **Dispatch** the turn sequence to the selected provider
//!
//! Steps 1 and 2 never touch the network.

pub mod command;
pub mod complexity;
pub mod context;
pub mod handler;
pub mod intent;
pub mod templates;

pub use command::{CommandResult, CommandSuggestion, parse_command, suggest};
pub use complexity::ComplexityReport;
pub use context::{
    AssembledContext, AssemblyMetadata, AssemblyOptions, ContextAssembler, Framework,
    FrameworkSource, SourceError, SourceTier, default_sources, load_framework,
};
pub use handler::{BudgetTier, ContextPlan, ContextPreview, RequestHandler};
pub use intent::Route;
