use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListToolCategoriesRequest {
    /// Category to expand (case-insensitive). Omit for the overview.
    #[schemars(description = "Category name to expand (case-insensitive). Omit to list all categories.")]
    pub category: Option<String>,
}
