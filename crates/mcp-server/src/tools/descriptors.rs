#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "list_tool_categories",
        summary: "Category overview, or the tools in one category.",
    },
    ToolDescriptor {
        name: "fetch_tool_reference",
        summary: "Docs link, summary and setup commands for a tool (optional status check).",
    },
    ToolDescriptor {
        name: "framework_quickstart",
        summary: "Scaffold command and next steps for a framework + package manager.",
    },
    ToolDescriptor {
        name: "recommend_stack",
        summary: "Stack recommendation from a short project description.",
    },
    ToolDescriptor {
        name: "deployment_checklist",
        summary: "Deployment steps and notes for a hosting provider.",
    },
];

pub(crate) fn instructions() -> String {
    let mut out = String::from(
        "Full Stack Web Dev reference: curated tooling docs, framework quickstarts, stack recommendations and deployment checklists.",
    );
    for tool in TOOL_CATALOG {
        out.push_str(&format!("\n- {}: {}", tool.name, tool.summary));
    }
    out
}
