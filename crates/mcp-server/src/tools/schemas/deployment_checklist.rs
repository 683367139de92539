use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct DeploymentChecklistRequest {
    /// Hosting provider (defaults to the server's configured provider)
    #[schemars(description = "Hosting provider: vercel, netlify or cloudflare pages (defaults to the configured provider)")]
    pub provider: Option<String>,

    /// Include preview deployment notes
    #[schemars(description = "Set to 'yes', 'true' or '1' to include preview deployment guidance")]
    pub preview: Option<String>,
}
