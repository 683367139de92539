use crate::error::{Argument, Entity, LookupError, Result, SubOption};
use crate::normalize::normalize_key;
use crate::store::{Catalog, FALLBACK_PROVIDER};
use crate::types::{DeploymentPlaybook, FrameworkStarter, ToolRecord};

/// Package manager used when the caller does not name one.
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary<'a> {
    pub name: &'a str,
    pub tool_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryListing<'a> {
    /// Every category, sorted by name.
    Overview {
        categories: Vec<CategorySummary<'a>>,
        /// First category in authoring order, suggested as an example argument.
        example: Option<&'a str>,
    },
    /// Members of one category, sorted by label.
    Members { name: &'a str, tools: Vec<&'a str> },
}

/// A resolved scaffold command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickstartPlan<'a> {
    pub starter: &'a FrameworkStarter,
    pub manager: String,
    pub command: &'a str,
}

impl Catalog {
    pub fn resolve_category(&self, input: &str) -> Result<CategoryListing<'_>> {
        if input.trim().is_empty() {
            let categories = self
                .categories
                .iter()
                .map(|(name, tools)| CategorySummary {
                    name,
                    tool_count: tools.len(),
                })
                .collect();
            return Ok(CategoryListing::Overview {
                categories,
                example: self.first_category.as_deref(),
            });
        }

        let normalized = normalize_key(input);
        let (name, tools) = self
            .categories
            .iter()
            .find(|(name, _)| normalize_key(name) == normalized)
            .ok_or_else(|| LookupError::NotFound {
                entity: Entity::Category,
                input: input.to_string(),
            })?;

        Ok(CategoryListing::Members {
            name,
            tools: tools.iter().map(String::as_str).collect(),
        })
    }

    pub fn resolve_tool(&self, input: &str) -> Result<&ToolRecord> {
        if input.trim().is_empty() {
            return Err(LookupError::InvalidArgument(Argument::Tool));
        }
        self.tool_index
            .get(&normalize_key(input))
            .map(|&idx| &self.tools[idx])
            .ok_or_else(|| LookupError::NotFound {
                entity: Entity::Tool,
                input: input.to_string(),
            })
    }

    pub fn resolve_framework_starter(
        &self,
        framework: &str,
        package_manager: &str,
    ) -> Result<QuickstartPlan<'_>> {
        if framework.trim().is_empty() {
            return Err(LookupError::InvalidArgument(Argument::Framework));
        }
        let starter =
            self.frameworks
                .get(&normalize_key(framework))
                .ok_or_else(|| LookupError::NotFound {
                    entity: Entity::Framework,
                    input: framework.to_string(),
                })?;

        let manager = if package_manager.trim().is_empty() {
            DEFAULT_PACKAGE_MANAGER.to_string()
        } else {
            normalize_key(package_manager)
        };
        let command = starter
            .command_for(&manager)
            .ok_or_else(|| LookupError::Unsupported {
                option: SubOption::PackageManager,
                input: package_manager.to_string(),
                available: starter.managers().map(str::to_string).collect(),
            })?;

        Ok(QuickstartPlan {
            starter,
            manager,
            command,
        })
    }

    /// Resolve a playbook. A blank `provider` selects `default_provider` as configured,
    /// without normalization; when the configured default matches nothing, the lookup is
    /// retried under [`FALLBACK_PROVIDER`].
    pub fn resolve_deployment_playbook(
        &self,
        provider: &str,
        default_provider: &str,
    ) -> Result<&DeploymentPlaybook> {
        let selected = if provider.trim().is_empty() {
            default_provider.to_string()
        } else {
            normalize_key(provider)
        };

        let mut entry = self.deployments.get(&selected);
        if entry.is_none() && selected == default_provider {
            entry = self.deployments.get(FALLBACK_PROVIDER);
        }

        entry.ok_or_else(|| LookupError::Unsupported {
            option: SubOption::Provider,
            input: provider.to_string(),
            available: self
                .deployment_providers()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::tool;
    use crate::types::{DeploymentPlaybook, PackageCommand};
    use pretty_assertions::assert_eq;

    fn bundled() -> Catalog {
        Catalog::bundled().expect("bundled catalog")
    }

    fn playbook(key: &str) -> DeploymentPlaybook {
        DeploymentPlaybook {
            key: key.to_string(),
            label: key.to_string(),
            docs: format!("https://{key}.test/docs"),
            steps: vec![format!("{key} deploy")],
            notes: Vec::new(),
        }
    }

    #[test]
    fn overview_lists_categories_sorted_with_counts() {
        let catalog = Catalog::build(
            vec![
                tool("Zed", &[], "Zed", "Zeta"),
                tool("Alpha", &[], "Alpha", "Beta"),
                tool("Gamma", &[], "Gamma", "Zeta"),
            ],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let listing = catalog.resolve_category("  ").expect("overview");
        assert_eq!(
            listing,
            CategoryListing::Overview {
                categories: vec![
                    CategorySummary {
                        name: "Beta",
                        tool_count: 1
                    },
                    CategorySummary {
                        name: "Zeta",
                        tool_count: 2
                    },
                ],
                example: Some("Zeta"),
            }
        );
    }

    #[test]
    fn category_match_ignores_case_and_whitespace() {
        let catalog = bundled();
        let exact = catalog.resolve_category("UI Libraries & Styling").expect("exact");
        let lower = catalog
            .resolve_category("  ui libraries & styling ")
            .expect("lower");
        assert_eq!(exact, lower);
        assert_eq!(
            exact,
            CategoryListing::Members {
                name: "UI Libraries & Styling",
                tools: vec!["Tailwind CSS", "shadcn/ui"],
            }
        );
    }

    #[test]
    fn unknown_category_is_not_found() {
        let err = bundled().resolve_category("Quantum").unwrap_err();
        assert_eq!(err.to_string(), "Unknown category 'Quantum'.");
    }

    #[test]
    fn tool_lookup_by_alias_and_case() {
        let catalog = bundled();
        let by_key = catalog.resolve_tool("Node.js").expect("key");
        assert_eq!(catalog.resolve_tool("  NODE ").expect("alias"), by_key);
        assert_eq!(catalog.resolve_tool("nodejs").expect("alias"), by_key);
        assert_eq!(by_key.label, "Node.js");
    }

    #[test]
    fn tool_lookup_errors() {
        let catalog = bundled();
        assert_eq!(
            catalog.resolve_tool("").unwrap_err(),
            LookupError::InvalidArgument(Argument::Tool)
        );
        assert_eq!(
            catalog.resolve_tool("   ").unwrap_err(),
            LookupError::InvalidArgument(Argument::Tool)
        );
        assert!(matches!(
            catalog.resolve_tool("nonexistent-tool-xyz").unwrap_err(),
            LookupError::NotFound {
                entity: Entity::Tool,
                ..
            }
        ));
    }

    #[test]
    fn quickstart_selects_package_manager() {
        let catalog = bundled();
        let pnpm = catalog.resolve_framework_starter("next.js", "pnpm").unwrap();
        assert_eq!(pnpm.command, "pnpm create next-app my-app");
        let yarn = catalog.resolve_framework_starter("Next.js", " YARN ").unwrap();
        assert_eq!(yarn.command, "yarn create next-app my-app");
        assert_eq!(yarn.manager, "yarn");
        let default = catalog.resolve_framework_starter("next.js", "").unwrap();
        assert_eq!(default.manager, "npm");
        assert_eq!(default.command, "npx create-next-app@latest my-app");
    }

    #[test]
    fn quickstart_unsupported_manager_lists_alternatives_in_order() {
        let err = bundled()
            .resolve_framework_starter("next.js", "cargo")
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::Unsupported {
                option: SubOption::PackageManager,
                input: "cargo".to_string(),
                available: vec![
                    "npm".to_string(),
                    "pnpm".to_string(),
                    "yarn".to_string(),
                    "bun".to_string()
                ],
            }
        );
    }

    #[test]
    fn quickstart_argument_errors() {
        let catalog = bundled();
        assert_eq!(
            catalog.resolve_framework_starter(" ", "npm").unwrap_err(),
            LookupError::InvalidArgument(Argument::Framework)
        );
        assert_eq!(
            catalog
                .resolve_framework_starter("Angular", "")
                .unwrap_err()
                .to_string(),
            "Framework 'Angular' is not supported."
        );
    }

    #[test]
    fn starter_commands_keep_authoring_order() {
        let starter = FrameworkStarter {
            key: "x".to_string(),
            label: "X".to_string(),
            docs: String::new(),
            commands: vec![
                PackageCommand {
                    manager: "yarn".to_string(),
                    command: "yarn create x".to_string(),
                },
                PackageCommand {
                    manager: "npm".to_string(),
                    command: "npm create x".to_string(),
                },
            ],
            post_install: Vec::new(),
        };
        assert_eq!(starter.managers().collect::<Vec<_>>(), vec!["yarn", "npm"]);
    }

    #[test]
    fn blank_provider_uses_default() {
        let catalog = bundled();
        let playbook = catalog.resolve_deployment_playbook("", "vercel").unwrap();
        assert_eq!(playbook.label, "Vercel");
        let netlify = catalog.resolve_deployment_playbook(" ", "netlify").unwrap();
        assert_eq!(netlify.label, "Netlify");
    }

    #[test]
    fn explicit_provider_is_normalized() {
        let catalog = bundled();
        let playbook = catalog
            .resolve_deployment_playbook(" Cloudflare Pages ", "vercel")
            .unwrap();
        assert_eq!(playbook.label, "Cloudflare Pages");
    }

    #[test]
    fn unmatched_default_falls_back_to_vercel() {
        let catalog = bundled();
        // Configured defaults are used verbatim, so a capitalized default misses the index.
        let playbook = catalog.resolve_deployment_playbook("", "Vercel").unwrap();
        assert_eq!(playbook.key, "vercel");
        let playbook = catalog.resolve_deployment_playbook("", "render").unwrap();
        assert_eq!(playbook.key, "vercel");
    }

    #[test]
    fn explicit_provider_equal_to_unmatched_default_falls_back() {
        let catalog = bundled();
        let playbook = catalog
            .resolve_deployment_playbook("render", "render")
            .unwrap();
        assert_eq!(playbook.key, "vercel");
        let playbook = catalog
            .resolve_deployment_playbook(" RENDER ", "render")
            .unwrap();
        assert_eq!(playbook.key, "vercel");
        // Only the configured default is rescued.
        assert!(catalog
            .resolve_deployment_playbook("render", "netlify")
            .is_err());
    }

    #[test]
    fn fallback_needs_vercel_in_the_catalog() {
        let catalog = Catalog::build(Vec::new(), Vec::new(), vec![playbook("fly")], Vec::new());
        assert!(catalog.resolve_deployment_playbook("", "render").is_err());
        assert_eq!(
            catalog.resolve_deployment_playbook("", "fly").unwrap().key,
            "fly"
        );
    }

    #[test]
    fn unknown_provider_lists_sorted_providers() {
        let err = bundled()
            .resolve_deployment_playbook("unknown-host", "vercel")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown provider 'unknown-host'. Supported providers: cloudflare pages, netlify, vercel."
        );
    }
}
