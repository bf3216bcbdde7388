//! Fixed response text.
//!
//! Templates are plain data. Named slots are written `{slot}` and filled by
//! [`render`] in a single pass, so substituted values are copied verbatim
//! even when they contain braces themselves.

/// Fill `{name}` slots in `template` from `slots`.
///
/// Slots without a value are left as written.
pub fn render(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let name = after
            .find('}')
            .map(|close| &after[..close])
            .filter(|name| !name.contains('{'));
        let value = name.and_then(|name| slots.iter().find(|(slot, _)| *slot == name));
        match (name, value) {
            (Some(name), Some((_, value))) => {
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ── Commands ──────────────────────────────────────────────────────────────

pub const HELP: &str = "🎭 **Welcome to Public Radio Agents - Your Management Team!**

Here are the Available Commands, grouped by what you want to do.

**📋 GETTING STARTED (New Users)**
• `*chat-mode` - Start with general consultation and questions
• `*kb-mode` - Access public radio knowledge base and best practices
• `*party-mode` - Get advice from all agents working together

**👥 EXPERT AGENTS (Choose Your Specialist)**

💝 **Development/Fundraising Expert - Sarah Chen**
• `*agent development-director` - Membership campaigns, donor relations, grants, major gifts

📢 **Marketing & Audience Expert - Marcus Rodriguez**
• `*agent marketing-director` - Social media, branding, community engagement, digital strategy

🤝 **Corporate Partnership Expert - Diana Kim**
• `*agent underwriting-director` - Sponsorships, business partnerships, corporate relations

🎙️ **Programming Expert - Jordan Taylor**
• `*agent program-director` - Show development, scheduling, FCC compliance, talent management

**🔄 STRUCTURED WORKFLOWS (Step-by-Step Processes)**
• `*workflow annual-planning` - Complete yearly strategic planning
• `*workflow membership-campaign` - End-to-end fundraising campaigns
• `*workflow program-launch` - New show development process

**🔧 SYSTEM UTILITIES**
• `*help` - Show this help menu
• `*status` - Check current progress and context
• `*exit` - Return to main orchestrator

**💡 QUICK EXAMPLES:**
• \"Membership is declining\" → Try `*agent development-director`
• \"Need social media help\" → Try `*agent marketing-director`
• \"Want more sponsors\" → Try `*agent underwriting-director`
• \"Planning new programming\" → Try `*agent program-director`
• \"Need strategic planning\" → Try `*workflow annual-planning`
• \"General questions\" → Try `*chat-mode` or `*kb-mode`

**🎯 PRO TIP:** All commands start with `*` (asterisk). Be specific about your station's situation for best results!

What challenge can we help you tackle today?";

pub const AGENTS_MENU: &str = "**👥 Available Agents:**

{entries}

Use: `*agent [name]` to switch to that agent.";

/// One line of [`AGENTS_MENU`].
pub const AGENTS_MENU_ENTRY: &str = "{n}. **{id}** {icon} - {first_name} ({domain})";

pub const AGENT_ACTIVATION: &str = "🎭 **Activating {title}**

{icon} **{display_name} - {title}**

{greeting}

{focus_areas}

{closing}";

/// One bullet of [`AGENT_ACTIVATION`].
pub const FOCUS_AREA_ENTRY: &str = "• **{name}** - {detail}";

pub const AGENT_UNKNOWN: &str = "🎭 **Agent Activation**

Switching to {id} agent...

Available agents: {ids}";

pub const WORKFLOWS_MENU: &str = "**🔄 Available Workflows:**

{entries}

Use: `*workflow [name]` to start a workflow.";

/// One line of [`WORKFLOWS_MENU`].
pub const WORKFLOWS_MENU_ENTRY: &str = "{n}. **{id}** - {summary}";

pub const WORKFLOW_START: &str = "🔄 Starting {id} workflow...";

/// Appended to [`WORKFLOW_START`] for workflows in the catalog.
pub const WORKFLOW_DETAIL: &str = "

{icon} **{name}** - {summary}";

pub const STATUS: &str = "**📊 Current Status:**
• **Active Agent**: Public Radio Orchestrator 🎭
• **Mode**: Command interface
• **Available**: {persona_count} specialist agents, {workflow_count} workflows

Use `*help` to see all available commands.";

pub const CHAT_MODE: &str = "💬 **Chat Mode Activated**

You're now in general consultation mode. You can:
• Ask questions about public radio management
• Get advice on station operations
• Discuss industry best practices
• Request general guidance

I'm here to help with any questions you have about running your public radio station!";

pub const EXIT: &str = "🎭 **Returned to Orchestrator**

You're now back with the Public Radio Orchestrator.

Use `*help` to see all available commands and agents.";

pub const PARTY_MODE: &str = "🎉 **Party Mode Activated - All Agents Collaboration**

All four Public Radio Agents are now participating in this conversation:

💝 **Sarah Chen** (Development Director) - Ready for fundraising strategy
📢 **Marcus Rodriguez** (Marketing Director) - Ready for audience development
🤝 **Diana Kim** (Underwriting Director) - Ready for corporate partnerships
🎙️ **Jordan Taylor** (Program Director) - Ready for programming strategy

**Perfect for:**
• Strategic planning sessions requiring multiple perspectives
• Complex problem-solving that spans departments
• Cross-departmental challenges and initiatives
• Innovation and brainstorming sessions

**How to use:** Ask questions that benefit from multiple expert viewpoints. All agents will contribute their specialized expertise to provide comprehensive solutions.

What multi-departmental challenge can we tackle together?";

pub const KB_MODE: &str = "📚 **Knowledge Base Mode Activated**

You now have access to comprehensive public radio industry knowledge:

**📊 Industry Knowledge**
• Public radio best practices and trends
• Audience research and demographic insights
• Industry benchmarks and performance metrics
• Successful case studies from stations nationwide

**📜 Regulatory & Compliance**
• FCC regulations and compliance requirements
• Underwriting guidelines and restrictions
• Public media law and policy updates
• Ethics and conflict of interest guidance

**💰 Fundraising & Development**
• Donor behavior research and trends
• Campaign strategies and methodologies
• Grant opportunities and foundation research
• Major gift and planned giving best practices

**📱 Marketing & Engagement**
• Digital marketing trends and strategies
• Social media best practices for public media
• Brand development and messaging guidance
• Community engagement methodologies

**🎙️ Programming & Content**
• Program development and scheduling strategies
• Audience feedback and content optimization
• Local programming and community content
• Talent development and training resources

**Ask me anything about public radio operations, and I'll provide evidence-based answers using industry research and best practices.**

What public radio knowledge can I help you access?";

pub const UNKNOWN_COMMAND: &str = "❓ Unknown command: `*{command}`

Use `*help` to see available commands.";

// ── Routing ───────────────────────────────────────────────────────────────

pub const ROUTE_PROGRAMMING: &str = "🎭 **Public Radio Orchestrator**

I can see you're looking for help with **programming and content creation**. This is exactly what our Program Director specializes in!

🎙️ **Next step:** Type `*agent program-director` to connect with Jordan Taylor, who can guide you through the entire process from concept to broadcast.

Or try `*workflow program-launch` for a structured development process.";

pub const ROUTE_FUNDRAISING: &str = "🎭 **Public Radio Orchestrator**

You're asking about **fundraising and development**. This is perfect for our Development Director!

💝 **Next step:** Type `*agent development-director` to work with Sarah Chen on your fundraising challenge.

Or try `*workflow membership-campaign` for comprehensive campaign planning.";

pub const ROUTE_MARKETING: &str = "🎭 **Public Radio Orchestrator**

This is a **marketing and audience development** question - perfect for our Marketing Director!

📢 **Next step:** Type `*agent marketing-director` to get expert guidance from Marcus Rodriguez.";

pub const ROUTE_WELCOME: &str = "🎭 **Welcome! I'm your Public Radio Orchestrator**

I'm here to connect you with the right expertise for your public radio needs.

**🚀 New to the system?** Type `*help` to see all available commands and agents.

**💬 What's your specific challenge or question?** Just describe what you're working on, and I'll guide you to the right expert.";

// ── Model path ────────────────────────────────────────────────────────────

/// The system turn handed to providers.
pub const SYSTEM_TURN: &str = "{framework}

{station}

{acting_role}";

pub const ACTING_ORCHESTRATOR: &str = "You are currently acting as the Public Radio Orchestrator. Provide helpful guidance for public radio station management.";

pub const ACTING_PERSONA: &str = "You are currently acting as {display_name}, the {title} of the Public Radio Agents team. Provide helpful guidance for public radio station management from that perspective.";

/// Framework text used when no document can be read.
pub const BUILTIN_FRAMEWORK: &str = "# Public Radio Orchestrator (Demo Mode)

You are the Public Radio Orchestrator, a master agent that coordinates between specialized public radio management experts.

## Available Agents:
- **Development Director** 💝: Fundraising, membership, major gifts
- **Marketing Director** 📢: Community engagement, social media, branding
- **Underwriting Director** 🤝: Corporate partnerships, sponsorships
- **Program Director** 🎙️: Programming, content, compliance

## Commands:
- *agent [name] - Switch to specialist agent
- *workflow [name] - Start structured workflow
- *help - Show available options
- *status - Current system status

How can I help your station today?";
