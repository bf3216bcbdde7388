//! The fixed persona table.
//!
//! Four specialist personas plus the orchestrator sentinel. The table is
//! `const` data: it is built at compile time and only ever read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier reported when no persona is active.
pub const ORCHESTRATOR_ID: &str = "orchestrator";

/// One of the specialist personas the service can adopt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaId {
    DevelopmentDirector,
    MarketingDirector,
    UnderwritingDirector,
    ProgramDirector,
}

impl PersonaId {
    /// All personas, in menu order.
    pub const ALL: [PersonaId; 4] = [
        PersonaId::DevelopmentDirector,
        PersonaId::MarketingDirector,
        PersonaId::UnderwritingDirector,
        PersonaId::ProgramDirector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::DevelopmentDirector => "development-director",
            PersonaId::MarketingDirector => "marketing-director",
            PersonaId::UnderwritingDirector => "underwriting-director",
            PersonaId::ProgramDirector => "program-director",
        }
    }

    /// The descriptor for this persona.
    pub fn descriptor(self) -> &'static PersonaDescriptor {
        match self {
            PersonaId::DevelopmentDirector => &PERSONAS[0],
            PersonaId::MarketingDirector => &PERSONAS[1],
            PersonaId::UnderwritingDirector => &PERSONAS[2],
            PersonaId::ProgramDirector => &PERSONAS[3],
        }
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known persona.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown persona: {0}")]
pub struct UnknownPersona(pub String);

impl FromStr for PersonaId {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownPersona(s.to_string()))
    }
}

/// A specialist area listed in a persona's activation message.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FocusArea {
    pub name: &'static str,
    pub detail: &'static str,
}

/// Everything the service knows about a persona.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PersonaDescriptor {
    pub id: PersonaId,
    /// Full name, e.g. "Sarah Chen"
    pub display_name: &'static str,
    pub first_name: &'static str,
    /// Job title, e.g. "Development Director"
    pub title: &'static str,
    pub icon: &'static str,
    /// One-line summary of the persona's domain.
    pub domain_summary: &'static str,
    pub greeting: &'static str,
    pub focus_areas: &'static [FocusArea],
    pub closing: &'static str,
}

impl PersonaDescriptor {
    /// Multi-line description used when no structured framework text is
    /// available for the persona.
    pub fn extended_description(&self) -> String {
        let mut text = format!(
            "## Active Agent: {} {} ({})\n\n{}\n\nAreas of expertise:\n",
            self.icon, self.display_name, self.title, self.domain_summary
        );
        for area in self.focus_areas {
            text.push_str(&format!("- {}: {}\n", area.name, area.detail));
        }
        text.push_str(&format!(
            "\nStay in character as {} and answer from the {} perspective.",
            self.first_name, self.title
        ));
        text
    }
}

/// Look up a persona descriptor by its string id.
pub fn find_persona(id: &str) -> Option<&'static PersonaDescriptor> {
    id.parse::<PersonaId>().ok().map(PersonaId::descriptor)
}

/// The persona table, in menu order.
pub const PERSONAS: [PersonaDescriptor; 4] = [
    PersonaDescriptor {
        id: PersonaId::DevelopmentDirector,
        display_name: "Sarah Chen",
        first_name: "Sarah",
        title: "Development Director",
        icon: "💝",
        domain_summary: "Fundraising & Development: membership campaigns, donor relations, grants, major gifts",
        greeting: "Hello! I'm Sarah, your dedicated Development Director. I specialize in:",
        focus_areas: &[
            FocusArea { name: "Individual Giving Programs", detail: "Building sustainable donor relationships" },
            FocusArea { name: "Major Gifts Strategy", detail: "Securing transformational donations" },
            FocusArea { name: "Membership Campaigns", detail: "Growing your listener support base" },
            FocusArea { name: "Grant Writing", detail: "Foundation and government funding" },
            FocusArea { name: "Special Events", detail: "Engaging fundraising experiences" },
        ],
        closing: "What development challenge can I help you tackle today?",
    },
    PersonaDescriptor {
        id: PersonaId::MarketingDirector,
        display_name: "Marcus Rodriguez",
        first_name: "Marcus",
        title: "Marketing Director",
        icon: "📢",
        domain_summary: "Marketing & Community: social media, branding, community engagement, digital strategy",
        greeting: "¡Hola! I'm Marcus, your Marketing Director. I excel at:",
        focus_areas: &[
            FocusArea { name: "Community Engagement", detail: "Building deep listener connections" },
            FocusArea { name: "Brand Strategy", detail: "Strengthening your station's identity" },
            FocusArea { name: "Digital Marketing", detail: "Social media and online presence" },
            FocusArea { name: "Event Promotion", detail: "Driving attendance and awareness" },
            FocusArea { name: "Audience Development", detail: "Growing and diversifying listenership" },
        ],
        closing: "How can we amplify your station's reach today?",
    },
    PersonaDescriptor {
        id: PersonaId::UnderwritingDirector,
        display_name: "Diana Kim",
        first_name: "Diana",
        title: "Underwriting Director",
        icon: "🤝",
        domain_summary: "Corporate Partnerships: sponsorships, business partnerships, corporate relations",
        greeting: "Hello! I'm Diana, your Underwriting Director. My expertise includes:",
        focus_areas: &[
            FocusArea { name: "Corporate Partnerships", detail: "Building mutually beneficial relationships" },
            FocusArea { name: "Sponsorship Packages", detail: "Creating compelling value propositions" },
            FocusArea { name: "Business Development", detail: "Identifying new revenue opportunities" },
            FocusArea { name: "Contract Negotiation", detail: "Securing favorable terms" },
            FocusArea { name: "Client Relations", detail: "Maintaining long-term partnerships" },
        ],
        closing: "What underwriting opportunity shall we explore?",
    },
    PersonaDescriptor {
        id: PersonaId::ProgramDirector,
        display_name: "Jordan Taylor",
        first_name: "Jordan",
        title: "Program Director",
        icon: "🎙️",
        domain_summary: "Programming & Content: show development, scheduling, FCC compliance, talent management",
        greeting: "Hey there! I'm Jordan, your Program Director. I focus on:",
        focus_areas: &[
            FocusArea { name: "Content Strategy", detail: "Developing engaging programming" },
            FocusArea { name: "Show Development", detail: "Creating new program concepts" },
            FocusArea { name: "Talent Management", detail: "Supporting on-air personalities" },
            FocusArea { name: "Scheduling", detail: "Optimizing program flow and timing" },
            FocusArea { name: "Production Quality", detail: "Ensuring broadcast excellence" },
        ],
        closing: "What programming vision can we bring to life?",
    },
];
