//! Rule-based routing of simple requests to a specialist.
//!
//! Deliberately narrow: only explicit help-seeking phrasing with a clear
//! topic, or a very short orientation question, is answered here. All
//! other text goes to the model.

use crate::templates;

/// Short messages below this many characters may get the welcome reply.
const SHORT_MESSAGE_CHARS: usize = 20;

/// Which canned suggestion was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Programming,
    Fundraising,
    Marketing,
    Welcome,
}

impl Route {
    pub fn response_text(self) -> &'static str {
        match self {
            Route::Programming => templates::ROUTE_PROGRAMMING,
            Route::Fundraising => templates::ROUTE_FUNDRAISING,
            Route::Marketing => templates::ROUTE_MARKETING,
            Route::Welcome => templates::ROUTE_WELCOME,
        }
    }
}

/// Topic buckets, tested in order. First match wins.
const TOPICS: [(Route, &[&str]); 3] = [
    (Route::Programming, &["podcast", "program", "show"]),
    (Route::Fundraising, &["fundrais", "donor", "member", "money"]),
    (Route::Marketing, &["marketing", "social", "audience", "brand"]),
];

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn is_help_seeking(text: &str) -> bool {
    (text.contains("help me") && contains_any(text, &["make", "create", "do"]))
        || (text.contains("i need") && contains_any(text, &["help", "to"]))
        || text.contains("how do i")
        || text.contains("how can i")
}

/// Classify `input`, returning the route if one applies.
pub fn classify(input: &str) -> Option<Route> {
    let text = input.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if is_help_seeking(&text) {
        if let Some((route, _)) = TOPICS.iter().find(|(_, words)| contains_any(&text, words)) {
            return Some(*route);
        }
    }

    if text.chars().count() < SHORT_MESSAGE_CHARS
        && contains_any(&text, &["help", "start", "what"])
    {
        return Some(Route::Welcome);
    }

    None
}

/// The routed suggestion for `input`, if any.
pub fn route(input: &str) -> Option<&'static str> {
    classify(input).map(Route::response_text)
}
