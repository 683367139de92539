use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use webdev_catalog::Catalog;

use super::descriptors;
use super::router::{categories, deployment, quickstart, stack, tool_reference};
use super::schemas::deployment_checklist::DeploymentChecklistRequest;
use super::schemas::fetch_tool_reference::FetchToolReferenceRequest;
use super::schemas::framework_quickstart::FrameworkQuickstartRequest;
use super::schemas::list_tool_categories::ListToolCategoriesRequest;
use super::schemas::recommend_stack::RecommendStackRequest;
use crate::config::ServerConfig;
use crate::status_probe::StatusProbe;

/// Web-dev reference MCP service.
///
/// Cloned per connection by rmcp; all clones share the same immutable catalog.
#[derive(Clone)]
pub struct WebDevReferenceService {
    catalog: Arc<Catalog>,
    config: Arc<ServerConfig>,
    probe: Arc<dyn StatusProbe>,
    tool_router: ToolRouter<Self>,
}

impl WebDevReferenceService {
    pub fn new(catalog: Arc<Catalog>, config: ServerConfig, probe: Arc<dyn StatusProbe>) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
            probe,
            tool_router: Self::tool_router(),
        }
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub(crate) fn probe(&self) -> &dyn StatusProbe {
        self.probe.as_ref()
    }
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl WebDevReferenceService {
    #[tool(
        description = "List available tool categories with member counts, or pass a category name to list its tools."
    )]
    pub async fn list_tool_categories(
        &self,
        Parameters(request): Parameters<ListToolCategoriesRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(categories::list_tool_categories(self, request))
    }

    #[tool(
        description = "Retrieve documentation details (summary, docs link, CLI setup) for a tool by name or alias. Set include_status=yes to check the docs homepage."
    )]
    pub async fn fetch_tool_reference(
        &self,
        Parameters(request): Parameters<FetchToolReferenceRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(tool_reference::fetch_tool_reference(self, request).await)
    }

    #[tool(
        description = "Provide quickstart commands for a framework (next.js, sveltekit, remix, nuxt) with npm, pnpm, yarn or bun."
    )]
    pub async fn framework_quickstart(
        &self,
        Parameters(request): Parameters<FrameworkQuickstartRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(quickstart::framework_quickstart(self, request))
    }

    #[tool(
        description = "Suggest a full-stack combination for a project description, tailored by experience level and realtime needs."
    )]
    pub async fn recommend_stack(
        &self,
        Parameters(request): Parameters<RecommendStackRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(stack::recommend_stack(self, request))
    }

    #[tool(
        description = "Return the deployment checklist for a hosting provider (vercel, netlify, cloudflare pages)."
    )]
    pub async fn deployment_checklist(
        &self,
        Parameters(request): Parameters<DeploymentChecklistRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(deployment::deployment_checklist(self, request))
    }
}

#[tool_handler]
impl ServerHandler for WebDevReferenceService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(descriptors::instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
