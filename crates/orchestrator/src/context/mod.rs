//! Framework context: where the orchestration text comes from and how it
//! is cut down to fit a request's budget.
//!
//! | Layer | Source | Trim Strategy |
//! |-------|--------|---------------|
//! | 1. Base | Preamble, team config, orchestrator agent | Truncated first |
//! | 2. Persona | Active persona's agent section | Truncated only if alone too large |
//! | 3. Workflows | Workflow sections | Whole or dropped |
//! | 4. Auxiliary | Data, tasks, templates, checklists, utils | Whole or dropped |

pub mod assembler;
pub mod bundle;
pub mod source;
pub mod token;

pub use assembler::{
    AssembledContext, AssemblyMetadata, AssemblyOptions, ContextAssembler, DropInfo, SectionStats,
};
pub use bundle::{FrameworkBundle, Section, SectionKind};
pub use source::{
    BuiltinSource, BundleSource, Framework, FrameworkSource, RawFileSource, SourceError,
    SourceTier, default_sources, load_framework,
};
