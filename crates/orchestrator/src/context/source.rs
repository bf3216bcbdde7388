//! Framework content sources and the fallback chain.
//!
//! Sources are tried in order once at startup. Each failure is logged and
//! the next source is tried; [`BuiltinSource`] cannot fail, so loading
//! always produces a [`Framework`].

use std::path::{Path, PathBuf};

use airwave_core::persona::find_persona;
use serde::Serialize;
use tracing::{info, warn};

use super::bundle::{FrameworkBundle, Section};
use crate::templates;

/// Which source the loaded framework came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTier {
    Bundle,
    RawFile,
    Builtin,
}

impl SourceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTier::Bundle => "bundle",
            SourceTier::RawFile => "raw_file",
            SourceTier::Builtin => "builtin",
        }
    }
}

/// Errors from loading a framework source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No framework sections found in {0}")]
    NoSections(PathBuf),

    #[error("Framework document {0} is empty")]
    Empty(PathBuf),
}

#[derive(Debug, Clone)]
enum Content {
    Structured(FrameworkBundle),
    Plain(String),
}

/// Loaded framework content, shared read-only across requests.
#[derive(Debug, Clone)]
pub struct Framework {
    tier: SourceTier,
    content: Content,
}

impl Framework {
    pub fn structured(bundle: FrameworkBundle) -> Self {
        Self {
            tier: SourceTier::Bundle,
            content: Content::Structured(bundle),
        }
    }

    pub fn plain(tier: SourceTier, text: impl Into<String>) -> Self {
        Self {
            tier,
            content: Content::Plain(text.into()),
        }
    }

    pub fn builtin() -> Self {
        Self::plain(SourceTier::Builtin, templates::BUILTIN_FRAMEWORK)
    }

    pub fn tier(&self) -> SourceTier {
        self.tier
    }

    /// Base orchestration text.
    pub fn base_text(&self) -> String {
        match &self.content {
            Content::Structured(bundle) => bundle.base_text(),
            Content::Plain(text) => text.clone(),
        }
    }

    /// The persona's extended description, or `None` for unknown ids.
    ///
    /// Bundles without a section for a known persona fall back to the
    /// description built from the persona table.
    pub fn persona_text(&self, persona_id: &str) -> Option<String> {
        let descriptor = find_persona(persona_id)?;
        let from_bundle = match &self.content {
            Content::Structured(bundle) => bundle.agent(persona_id).map(|s| s.text.clone()),
            Content::Plain(_) => None,
        };
        Some(from_bundle.unwrap_or_else(|| descriptor.extended_description()))
    }

    /// Workflow sections. Empty for plain sources.
    pub fn workflows(&self) -> Vec<&Section> {
        match &self.content {
            Content::Structured(bundle) => bundle.workflows().collect(),
            Content::Plain(_) => Vec::new(),
        }
    }

    /// Auxiliary reference sections for `persona_id` plus shared ones.
    pub fn auxiliary(&self, persona_id: Option<&str>) -> Vec<&Section> {
        match &self.content {
            Content::Structured(bundle) => bundle.dependencies(persona_id),
            Content::Plain(_) => Vec::new(),
        }
    }
}

/// A place framework content can be loaded from.
pub trait FrameworkSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn load(&self) -> Result<Framework, SourceError>;
}

fn read(path: &Path) -> Result<String, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(SourceError::Empty(path.to_path_buf()));
    }
    Ok(text)
}

/// The bundled framework document with START/END sections.
pub struct BundleSource {
    path: PathBuf,
}

impl BundleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameworkSource for BundleSource {
    fn name(&self) -> &'static str {
        "bundle"
    }

    fn load(&self) -> Result<Framework, SourceError> {
        let bundle = FrameworkBundle::parse(&read(&self.path)?);
        if bundle.is_empty() {
            return Err(SourceError::NoSections(self.path.clone()));
        }
        Ok(Framework::structured(bundle))
    }
}

/// A plain document used whole as the base text.
pub struct RawFileSource {
    path: PathBuf,
}

impl RawFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameworkSource for RawFileSource {
    fn name(&self) -> &'static str {
        "raw_file"
    }

    fn load(&self) -> Result<Framework, SourceError> {
        Ok(Framework::plain(SourceTier::RawFile, read(&self.path)?))
    }
}

/// Hardcoded demo-mode text.
pub struct BuiltinSource;

impl FrameworkSource for BuiltinSource {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn load(&self) -> Result<Framework, SourceError> {
        Ok(Framework::builtin())
    }
}

/// Bundle, then raw file, then builtin.
pub fn default_sources(config: &airwave_config::FrameworkConfig) -> Vec<Box<dyn FrameworkSource>> {
    vec![
        Box::new(BundleSource::new(&config.bundle_path)),
        Box::new(RawFileSource::new(&config.raw_path)),
        Box::new(BuiltinSource),
    ]
}

/// Try each source in order and return the first that loads.
pub fn load_framework(sources: &[Box<dyn FrameworkSource>]) -> Framework {
    for source in sources {
        match source.load() {
            Ok(framework) => {
                info!(source = source.name(), tier = framework.tier().as_str(), "Framework loaded");
                return framework;
            }
            Err(e) => warn!(source = source.name(), error = %e, "Framework source unavailable, trying next"),
        }
    }
    warn!("All framework sources failed, using builtin text");
    Framework::builtin()
}
