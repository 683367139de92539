//! Text templates for tool responses.
//!
//! Every template is a pure function of its inputs; the only time-dependent field, the
//! category timestamp, is passed in by the caller.

use chrono::{DateTime, Utc};
use webdev_catalog::{
    CategoryListing, DeploymentPlaybook, LookupError, QuickstartPlan, StackRecommendation,
    ToolRecord,
};

use crate::status_probe::ProbeOutcome;

const PREVIEW_HINT: &str =
    "Preview Mode: Enable preview deployments by linking feature branches.";

/// UTC, second precision, literal `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn render_error(error: &LookupError) -> String {
    format!("❌ Error: {error}")
}

pub fn render_category_listing(
    listing: &CategoryListing<'_>,
    generated_at: DateTime<Utc>,
) -> String {
    match listing {
        CategoryListing::Overview {
            categories,
            example,
        } => {
            let mut lines = vec!["📁 Available Categories:".to_string()];
            lines.extend(
                categories
                    .iter()
                    .map(|c| format!("- {} ({} tools)", c.name, c.tool_count)),
            );
            if let Some(example) = example {
                lines.push(String::new());
                lines.push(format!(
                    "Tip: Pass category=\"{example}\" to expand a category."
                ));
            }
            lines.join("\n")
        }
        CategoryListing::Members { name, tools } => {
            let mut lines = vec![format!("📊 Category: {name}"), String::new()];
            lines.push("Tools:".to_string());
            lines.extend(bullets(tools.iter().copied()));
            lines.push(String::new());
            lines.push(format!("Timestamp: {}", format_timestamp(generated_at)));
            lines.join("\n")
        }
    }
}

pub fn render_tool_reference(tool: &ToolRecord, status: Option<&ProbeOutcome>) -> String {
    let mut lines = vec![
        format!("✅ {} ({})", tool.label, tool.category),
        format!("Summary: {}", tool.summary),
        format!("Docs: {}", tool.homepage),
        "CLI Setup:".to_string(),
    ];
    lines.extend(bullets(tool.setup.iter().map(String::as_str)));
    if let Some(status) = status {
        lines.push(status.status_line());
    }
    lines.join("\n")
}

pub fn render_quickstart(plan: &QuickstartPlan<'_>) -> String {
    let mut lines = vec![
        format!("⚡ {} Quickstart", plan.starter.label),
        format!("Command: {}", plan.command),
        "Next Steps:".to_string(),
    ];
    lines.extend(bullets(plan.starter.post_install.iter().map(String::as_str)));
    lines.push(format!("Docs: {}", plan.starter.docs));
    lines.join("\n")
}

pub fn render_stack(recommendation: &StackRecommendation<'_>) -> String {
    let mut lines = vec![
        "✅ Recommended Stack".to_string(),
        format!("Summary: {}", recommendation.summary),
        format!("Frontend: {}", recommendation.frontend),
        format!("Backend: {}", recommendation.backend),
        format!("Infrastructure: {}", recommendation.infrastructure),
        "Extras:".to_string(),
    ];
    lines.extend(bullets(recommendation.extras.iter().map(String::as_str)));
    lines.join("\n")
}

pub fn render_deployment(playbook: &DeploymentPlaybook, preview: bool) -> String {
    let mut lines = vec![
        format!("🚀 {} Deployment Checklist", playbook.label),
        format!("Docs: {}", playbook.docs),
        "Steps:".to_string(),
    ];
    lines.extend(bullets(playbook.steps.iter().map(String::as_str)));
    lines.push("Notes:".to_string());
    lines.extend(bullets(playbook.notes.iter().map(String::as_str)));
    if preview {
        lines.push(PREVIEW_HINT.to_string());
    }
    lines.join("\n")
}

fn bullets<'a>(items: impl Iterator<Item = &'a str> + 'a) -> impl Iterator<Item = String> + 'a {
    items.map(|item| format!("- {item}"))
}
