use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct FetchToolReferenceRequest {
    /// Tool name or alias (e.g. "Next.js", "tailwind", "r3f")
    #[schemars(description = "Tool name or alias, e.g. 'Next.js', 'tailwind', 'r3f'")]
    pub tool: Option<String>,

    /// Opt-in homepage HEAD check ("yes", "true" or "1")
    #[schemars(description = "Set to 'yes', 'true' or '1' to check the docs homepage status")]
    pub include_status: Option<String>,
}
