//! The fixed workflow catalog offered by `*workflow`.

use serde::Serialize;

/// A structured multi-phase process the orchestrator can start.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkflowDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
}

pub const WORKFLOWS: [WorkflowDescriptor; 6] = [
    WorkflowDescriptor {
        id: "annual-planning",
        name: "Annual Strategic Planning",
        icon: "📅",
        summary: "Comprehensive strategic planning",
    },
    WorkflowDescriptor {
        id: "membership-campaign",
        name: "Membership Drive Campaign",
        icon: "💝",
        summary: "Plan membership drives",
    },
    WorkflowDescriptor {
        id: "underwriting-campaign",
        name: "Underwriting Sales Campaign",
        icon: "🤝",
        summary: "Corporate partnership campaigns",
    },
    WorkflowDescriptor {
        id: "program-launch",
        name: "New Program Launch",
        icon: "🎙️",
        summary: "New program development",
    },
    WorkflowDescriptor {
        id: "special-event",
        name: "Special Event Planning",
        icon: "🎉",
        summary: "Special event planning",
    },
    WorkflowDescriptor {
        id: "crisis-response",
        name: "Crisis Response Planning",
        icon: "🚨",
        summary: "Crisis management planning",
    },
];

/// Look up a workflow by id.
pub fn find_workflow(id: &str) -> Option<&'static WorkflowDescriptor> {
    WORKFLOWS.iter().find(|w| w.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_workflow() {
        let wf = find_workflow("program-launch").unwrap();
        assert_eq!(wf.name, "New Program Launch");
    }

    #[test]
    fn unknown_workflow_is_none() {
        assert!(find_workflow("budget-review").is_none());
    }
}
