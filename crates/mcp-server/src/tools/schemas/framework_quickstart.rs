use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct FrameworkQuickstartRequest {
    /// Framework to scaffold
    #[schemars(description = "Framework name: next.js, sveltekit, remix or nuxt")]
    pub framework: Option<String>,

    /// Package manager (default: npm)
    #[schemars(description = "Package manager: npm (default), pnpm, yarn or bun")]
    pub package_manager: Option<String>,
}
