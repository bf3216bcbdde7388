//! Parser for the bundled framework document.
//!
//! A bundle is a preamble followed by sections delimited by marker lines:
//!
//! ```text
//! ==================== START: .bmad-core/agents/program-director.md ====================
//! ...
//! ==================== END: .bmad-core/agents/program-director.md ====================
//! ```
//!
//! Dependency sections (data, tasks, templates, checklists, utils) that
//! follow a specialist's agent section belong to that specialist. Those
//! that appear after the workflows, or before any agent, are shared.

const MARKER_FENCE: &str = "====================";
const START: &str = "START:";
const END: &str = "END:";

/// The agent section that carries the base orchestration text.
pub const ORCHESTRATOR_AGENT: &str = "bmad-orchestrator";

/// What a section contains, from its folder in the bundle path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    AgentTeam,
    Agent,
    Workflow,
    Data,
    Task,
    Template,
    Checklist,
    Util,
    Other,
}

impl SectionKind {
    fn from_folder(folder: &str) -> Self {
        match folder {
            "agent-teams" => SectionKind::AgentTeam,
            "agents" => SectionKind::Agent,
            "workflows" => SectionKind::Workflow,
            "data" => SectionKind::Data,
            "tasks" => SectionKind::Task,
            "templates" => SectionKind::Template,
            "checklists" => SectionKind::Checklist,
            "utils" => SectionKind::Util,
            _ => SectionKind::Other,
        }
    }

    /// Reference material an agent can depend on.
    pub fn is_dependency(self) -> bool {
        matches!(
            self,
            SectionKind::Data
                | SectionKind::Task
                | SectionKind::Template
                | SectionKind::Checklist
                | SectionKind::Util
        )
    }
}

/// One START/END delimited section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Path as written in the marker, e.g. `.bmad-core/agents/program-director.md`
    pub path: String,
    pub kind: SectionKind,
    /// File stem, e.g. `program-director`
    pub name: String,
    /// The section text including its marker lines.
    pub text: String,
    /// Specialist agent this dependency belongs to. `None` means shared.
    pub owner: Option<String>,
}

impl Section {
    fn new(path: &str, text: String, owner: Option<String>) -> Self {
        let mut parts = path.trim_start_matches(".bmad-core/").split('/');
        let folder = parts.next().unwrap_or_default();
        let file = path.rsplit('/').next().unwrap_or(path);
        let name = file.split('.').next().unwrap_or(file).to_string();
        let kind = if path.contains('/') {
            SectionKind::from_folder(folder)
        } else {
            SectionKind::Other
        };
        Self {
            path: path.to_string(),
            kind,
            name,
            text,
            owner,
        }
    }
}

/// A parsed bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkBundle {
    pub preamble: String,
    pub sections: Vec<Section>,
}

/// Return the path if `line` is a marker of the given kind.
fn marker_path<'a>(line: &'a str, kind: &str) -> Option<&'a str> {
    let inner = line
        .trim()
        .strip_prefix(MARKER_FENCE)?
        .strip_suffix(MARKER_FENCE)?
        .trim();
    let path = inner.strip_prefix(kind)?.trim();
    (!path.is_empty()).then_some(path)
}

impl FrameworkBundle {
    /// Parse bundle text. A document without markers parses to a bundle
    /// with no sections.
    pub fn parse(text: &str) -> Self {
        let mut bundle = FrameworkBundle::default();
        let mut preamble: Vec<&str> = Vec::new();
        let mut open: Option<(&str, Vec<&str>)> = None;
        let mut owner: Option<String> = None;

        for line in text.lines() {
            if let Some((path, body)) = open.as_mut() {
                body.push(line);
                if marker_path(line, END) == Some(*path) {
                    let (path, body) = (*path, std::mem::take(body));
                    bundle.push(path, body.join("\n"), &mut owner);
                    open = None;
                }
                continue;
            }

            if let Some(path) = marker_path(line, START) {
                open = Some((path, vec![line]));
            } else if bundle.sections.is_empty() {
                preamble.push(line);
            }
        }

        // An unterminated section runs to the end of the document.
        if let Some((path, body)) = open {
            bundle.push(path, body.join("\n"), &mut owner);
        }

        bundle.preamble = preamble.join("\n").trim().to_string();
        bundle
    }

    fn push(&mut self, path: &str, text: String, owner: &mut Option<String>) {
        let mut section = Section::new(path, text, None);
        match section.kind {
            SectionKind::Agent => {
                *owner = (section.name != ORCHESTRATOR_AGENT).then(|| section.name.clone());
            }
            SectionKind::AgentTeam | SectionKind::Workflow => *owner = None,
            kind if kind.is_dependency() => section.owner = owner.clone(),
            _ => {}
        }
        self.sections.push(section);
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Preamble, team configuration and the orchestrator agent section.
    pub fn base_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.preamble.is_empty() {
            parts.push(&self.preamble);
        }
        parts.extend(
            self.sections
                .iter()
                .filter(|s| {
                    s.kind == SectionKind::AgentTeam
                        || (s.kind == SectionKind::Agent && s.name == ORCHESTRATOR_AGENT)
                })
                .map(|s| s.text.as_str()),
        );
        parts.join("\n\n")
    }

    /// The agent section for `agent_id`, if the bundle has one.
    pub fn agent(&self, agent_id: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.kind == SectionKind::Agent && s.name == agent_id)
    }

    pub fn workflows(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.kind == SectionKind::Workflow)
    }

    /// Dependency sections for `agent_id` followed by shared ones, or only
    /// the shared ones without an agent.
    pub fn dependencies(&self, agent_id: Option<&str>) -> Vec<&Section> {
        let deps = || self.sections.iter().filter(|s| s.kind.is_dependency());
        let mut out: Vec<&Section> = match agent_id {
            Some(id) => deps().filter(|s| s.owner.as_deref() == Some(id)).collect(),
            None => Vec::new(),
        };
        out.extend(deps().filter(|s| s.owner.is_none()));
        out
    }
}
