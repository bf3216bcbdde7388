//! Context assembly: the bounded system text handed to providers.
//!
//! Sections are filled in priority order under a hard character ceiling:
//!
//! 1. **Base** orchestration text, always present
//! 2. **Persona** text for the active persona, always present when known
//! 3. **Workflows**, each included whole or dropped
//! 4. **Auxiliary** reference material, each included whole or dropped
//!
//! If base and persona alone exceed the ceiling, the base is truncated
//! first. The persona is truncated only when it alone exceeds the ceiling.
//!
//! # Determinism
//!
//! Identical inputs always produce identical outputs.

use serde::Serialize;

use super::source::{Framework, SourceTier};
use super::token;

const SEPARATOR: &str = "\n\n";

/// What to include and how much room there is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyOptions {
    pub persona_id: Option<String>,
    pub include_workflows: bool,
    pub include_auxiliary: bool,
    /// Hard ceiling on the assembled text, in characters.
    pub max_chars: usize,
}

/// Statistics for one included section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionStats {
    pub layer: &'static str,
    pub name: String,
    pub chars: usize,
    pub truncated: bool,
}

/// A section left out to stay under the ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropInfo {
    pub layer: &'static str,
    pub name: String,
    pub chars: usize,
    pub reason: String,
}

/// Detailed metadata about the assembly process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyMetadata {
    pub tier: SourceTier,
    pub total_chars: usize,
    pub max_chars: usize,
    pub approx_tokens: usize,
    pub sections: Vec<SectionStats>,
    pub drops: Vec<DropInfo>,
}

/// The assembled framework text plus how it was built.
#[derive(Debug, Clone)]
pub struct AssembledContext {
    pub text: String,
    pub metadata: AssemblyMetadata,
}

struct Piece {
    layer: &'static str,
    name: String,
    text: String,
}

/// Builds [`AssembledContext`] from a loaded [`Framework`].
pub struct ContextAssembler<'a> {
    framework: &'a Framework,
}

impl<'a> ContextAssembler<'a> {
    pub fn new(framework: &'a Framework) -> Self {
        Self { framework }
    }

    pub fn assemble(&self, options: &AssemblyOptions) -> AssembledContext {
        let budget = options.max_chars;
        let mut included: Vec<(Piece, bool)> = Vec::new();
        let mut drops: Vec<DropInfo> = Vec::new();

        // ── Mandatory: base and persona ───────────────────────────────────
        let base = self.framework.base_text();
        let persona = options
            .persona_id
            .as_deref()
            .and_then(|id| self.framework.persona_text(id).map(|t| (id, t)))
            .filter(|(_, text)| !text.is_empty());

        let (base_room, persona_room) = match &persona {
            None => (budget, 0),
            Some((_, text)) => {
                let persona_len = token::char_len(text);
                if persona_len >= budget {
                    (0, budget)
                } else {
                    let room = budget - persona_len;
                    // The separator only costs room when base text remains.
                    (room.saturating_sub(SEPARATOR.len()), persona_len)
                }
            }
        };

        let base_len = token::char_len(&base);
        let base_kept = token::truncate_chars(&base, base_room);
        if !base_kept.is_empty() {
            included.push((
                Piece {
                    layer: "base",
                    name: "base".into(),
                    text: base_kept.to_string(),
                },
                base_kept.len() < base.len(),
            ));
        } else if base_len > 0 {
            drops.push(DropInfo {
                layer: "base",
                name: "base".into(),
                chars: base_len,
                reason: "No room left in budget".into(),
            });
        }

        if let Some((id, text)) = &persona {
            let kept = token::truncate_chars(text, persona_room);
            if !kept.is_empty() {
                included.push((
                    Piece {
                        layer: "persona",
                        name: id.to_string(),
                        text: kept.to_string(),
                    },
                    kept.len() < text.len(),
                ));
            }
        }

        let mut used = Self::joined_len(included.iter().map(|(p, _)| p));

        // ── Optional: workflows, then auxiliary ───────────────────────────
        let mut optional: Vec<Piece> = Vec::new();
        if options.include_workflows {
            optional.extend(self.framework.workflows().into_iter().map(|s| Piece {
                layer: "workflow",
                name: s.name.clone(),
                text: s.text.clone(),
            }));
        }
        if options.include_auxiliary {
            optional.extend(
                self.framework
                    .auxiliary(options.persona_id.as_deref())
                    .into_iter()
                    .map(|s| Piece {
                        layer: "auxiliary",
                        name: s.name.clone(),
                        text: s.text.clone(),
                    }),
            );
        }

        for piece in optional {
            let len = token::char_len(&piece.text);
            let cost = if used == 0 { len } else { len + SEPARATOR.len() };
            if used + cost <= budget {
                used += cost;
                included.push((piece, false));
            } else {
                drops.push(DropInfo {
                    layer: piece.layer,
                    name: piece.name,
                    chars: len,
                    reason: format!("Exceeds remaining budget ({} chars left)", budget - used),
                });
            }
        }

        // ── Join and report ───────────────────────────────────────────────
        let text = included
            .iter()
            .map(|(p, _)| p.text.as_str())
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let sections = included
            .iter()
            .map(|(p, truncated)| SectionStats {
                layer: p.layer,
                name: p.name.clone(),
                chars: token::char_len(&p.text),
                truncated: *truncated,
            })
            .collect();

        let total_chars = token::char_len(&text);
        AssembledContext {
            metadata: AssemblyMetadata {
                tier: self.framework.tier(),
                total_chars,
                max_chars: budget,
                approx_tokens: token::estimate_tokens(&text),
                sections,
                drops,
            },
            text,
        }
    }

    fn joined_len<'p>(pieces: impl Iterator<Item = &'p Piece>) -> usize {
        let mut total = 0;
        let mut count: usize = 0;
        for piece in pieces {
            total += token::char_len(&piece.text);
            count += 1;
        }
        total + count.saturating_sub(1) * SEPARATOR.len()
    }
}
