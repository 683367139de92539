//! Tool request schemas. Every parameter is optional; a missing value behaves like "".

pub mod deployment_checklist;
pub mod fetch_tool_reference;
pub mod framework_quickstart;
pub mod list_tool_categories;
pub mod recommend_stack;

pub(crate) fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
