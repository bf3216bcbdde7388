//! The request handler: one chat message in, one [`DispatchResult`] out.
//!
//! Stages run in a fixed order and the first one that answers wins:
//!
//! 1. **Command**: `*help`, `*agent <id>`, ...
//! 2. **Routed suggestion**: canned pointer at a specialist
//! 3. **Model**: classify, assemble context, build turns, dispatch
//!
//! Only the model stage can fail.

use std::sync::Arc;

use airwave_config::{AppConfig, BudgetConfig};
use airwave_core::persona::find_persona;
use airwave_core::{ChatRequest, DispatchResult, Result, StationProfile, TurnSequence};
use airwave_providers::{ProviderDispatcher, build_from_config};
use serde::Serialize;
use tracing::{debug, info};

use crate::command::{self, CommandResult};
use crate::complexity::{self, ComplexityReport};
use crate::context::{
    AssembledContext, AssemblyOptions, ContextAssembler, Framework, default_sources,
    load_framework, token,
};
use crate::intent;
use crate::templates::{self, render};

/// Which budget tier a request falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Complex,
    Persona,
    Plain,
}

/// The assembly decision for one message.
#[derive(Debug, Clone, Serialize)]
pub struct ContextPlan {
    pub complexity: ComplexityReport,
    pub tier: BudgetTier,
    pub budget_tokens: usize,
    pub persona_id: Option<String>,
    pub include_workflows: bool,
    pub include_auxiliary: bool,
}

impl ContextPlan {
    pub fn options(&self) -> AssemblyOptions {
        AssemblyOptions {
            persona_id: self.persona_id.clone(),
            include_workflows: self.include_workflows,
            include_auxiliary: self.include_auxiliary,
            max_chars: token::tokens_to_chars(self.budget_tokens),
        }
    }
}

/// A plan plus the context it produces, without calling a provider.
#[derive(Debug, Clone)]
pub struct ContextPreview {
    pub plan: ContextPlan,
    pub context: AssembledContext,
}

/// Runs the command, routing and model stages for each request.
pub struct RequestHandler {
    framework: Arc<Framework>,
    dispatcher: ProviderDispatcher,
    budgets: BudgetConfig,
}

impl RequestHandler {
    pub fn new(framework: Arc<Framework>, dispatcher: ProviderDispatcher, budgets: BudgetConfig) -> Self {
        Self {
            framework,
            dispatcher,
            budgets,
        }
    }

    /// Load the framework through the fallback chain and build providers.
    pub fn from_config(config: &AppConfig) -> Self {
        let framework = load_framework(&default_sources(&config.framework));
        Self::new(Arc::new(framework), build_from_config(config), config.budgets)
    }

    pub fn framework(&self) -> &Framework {
        &self.framework
    }

    pub fn dispatcher(&self) -> &ProviderDispatcher {
        &self.dispatcher
    }

    /// Decide the budget and layers for `content`.
    pub fn plan(&self, content: &str, persona_id: Option<&str>) -> ContextPlan {
        let complexity = complexity::analyze(content);
        let persona_id = persona_id
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string);

        let (tier, budget_tokens) = if complexity.is_complex {
            (BudgetTier::Complex, self.budgets.complex)
        } else if persona_id.is_some() {
            (BudgetTier::Persona, self.budgets.persona)
        } else {
            (BudgetTier::Plain, self.budgets.plain)
        };

        ContextPlan {
            include_workflows: tier == BudgetTier::Complex,
            include_auxiliary: tier != BudgetTier::Plain,
            complexity,
            tier,
            budget_tokens,
            persona_id,
        }
    }

    /// Plan and assemble context for `content` without dispatching.
    pub fn preview(&self, content: &str, persona_id: Option<&str>) -> ContextPreview {
        let plan = self.plan(content, persona_id);
        let context = ContextAssembler::new(&self.framework).assemble(&plan.options());
        ContextPreview { plan, context }
    }

    /// The full system turn: framework text, station line, acting role.
    pub fn system_turn(framework_text: &str, request: &ChatRequest) -> String {
        let station = StationProfile::context_line(request.station.as_ref());
        let acting_role = match request.active_persona().and_then(find_persona) {
            Some(persona) => render(
                templates::ACTING_PERSONA,
                &[("display_name", persona.display_name), ("title", persona.title)],
            ),
            None => templates::ACTING_ORCHESTRATOR.to_string(),
        };
        render(
            templates::SYSTEM_TURN,
            &[
                ("framework", framework_text),
                ("station", station.as_str()),
                ("acting_role", acting_role.as_str()),
            ],
        )
    }

    /// Answer one chat request.
    pub async fn handle(&self, request: &ChatRequest) -> Result<DispatchResult> {
        let parsed = command::parse_command(&request.content);
        let persona = parsed.activated_persona().map(str::to_string);
        if let CommandResult::Command {
            command,
            args,
            response_text,
        } = parsed
        {
            debug!(command = %command, "Handled as command");
            return Ok(DispatchResult::command(command, args, response_text, persona));
        }

        if let Some(route) = intent::classify(&request.content) {
            debug!(route = ?route, "Routed to suggestion");
            return Ok(DispatchResult::routed(route.response_text()));
        }

        let ContextPreview { plan, context } = self.preview(&request.content, request.active_persona());
        info!(
            complex = plan.complexity.is_complex,
            score = plan.complexity.score,
            tier = ?plan.tier,
            budget_tokens = plan.budget_tokens,
            "Complexity decision"
        );
        info!(
            chars = context.metadata.total_chars,
            approx_tokens = context.metadata.approx_tokens,
            dropped = context.metadata.drops.len(),
            "Context assembled"
        );

        let turns = TurnSequence::new(
            Self::system_turn(&context.text, request),
            request.messages.iter().cloned(),
            request.content.as_str(),
        );

        let result = self
            .dispatcher
            .dispatch(request.provider, turns, request.persona_or_orchestrator())
            .await?;
        Ok(result)
    }
}
