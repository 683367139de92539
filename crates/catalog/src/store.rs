use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::normalize::normalize_key;
use crate::types::{DeploymentPlaybook, FrameworkStarter, StackRecipe, ToolRecord};

const BUILTIN_TOOLS: &str = include_str!("../../../data/tools.json");
const BUILTIN_FRAMEWORKS: &str = include_str!("../../../data/frameworks.json");
const BUILTIN_DEPLOYMENTS: &str = include_str!("../../../data/deployments.json");
const BUILTIN_STACKS: &str = include_str!("../../../data/stacks.json");

const SCHEMA_VERSION: u32 = 1;

/// Provider retried when the configured default names no playbook.
pub const FALLBACK_PROVIDER: &str = "vercel";

#[derive(Deserialize)]
struct ToolsDocument {
    schema_version: u32,
    tools: Vec<ToolRecord>,
}

#[derive(Deserialize)]
struct FrameworksDocument {
    schema_version: u32,
    frameworks: Vec<FrameworkStarter>,
}

#[derive(Deserialize)]
struct DeploymentsDocument {
    schema_version: u32,
    deployments: Vec<DeploymentPlaybook>,
}

#[derive(Deserialize)]
struct StacksDocument {
    schema_version: u32,
    stacks: Vec<StackRecipe>,
}

/// Raw JSON documents a catalog is built from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSources<'a> {
    pub tools: &'a str,
    pub frameworks: &'a str,
    pub deployments: &'a str,
    pub stacks: &'a str,
}

impl CatalogSources<'static> {
    pub fn bundled() -> Self {
        Self {
            tools: BUILTIN_TOOLS,
            frameworks: BUILTIN_FRAMEWORKS,
            deployments: BUILTIN_DEPLOYMENTS,
            stacks: BUILTIN_STACKS,
        }
    }
}

/// Two tool records claiming the same normalized key. The later record wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    pub replaced: String,
    pub winner: String,
}

/// Immutable reference catalog with its derived indices.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) tools: Vec<ToolRecord>,
    /// Normalized key or alias -> index into `tools`.
    pub(crate) tool_index: HashMap<String, usize>,
    pub(crate) categories: BTreeMap<String, BTreeSet<String>>,
    /// First category in authoring order.
    pub(crate) first_category: Option<String>,
    pub(crate) frameworks: HashMap<String, FrameworkStarter>,
    pub(crate) deployments: BTreeMap<String, DeploymentPlaybook>,
    pub(crate) stacks: Vec<StackRecipe>,
    collisions: Vec<KeyCollision>,
}

impl Catalog {
    /// Load the catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_sources(CatalogSources::bundled())
    }

    pub fn from_sources(sources: CatalogSources<'_>) -> Result<Self, CatalogError> {
        let tools: ToolsDocument = parse_document("tools", sources.tools)?;
        check_schema("tools", tools.schema_version)?;
        let frameworks: FrameworksDocument = parse_document("frameworks", sources.frameworks)?;
        check_schema("frameworks", frameworks.schema_version)?;
        let deployments: DeploymentsDocument =
            parse_document("deployments", sources.deployments)?;
        check_schema("deployments", deployments.schema_version)?;
        let stacks: StacksDocument = parse_document("stacks", sources.stacks)?;
        check_schema("stacks", stacks.schema_version)?;

        Ok(Self::build(
            tools.tools,
            frameworks.frameworks,
            deployments.deployments,
            stacks.stacks,
        ))
    }

    /// Build indices from already-parsed records.
    pub fn build(
        tools: Vec<ToolRecord>,
        frameworks: Vec<FrameworkStarter>,
        deployments: Vec<DeploymentPlaybook>,
        stacks: Vec<StackRecipe>,
    ) -> Self {
        let mut tool_index = HashMap::new();
        let mut collisions = Vec::new();
        let mut categories: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut first_category = None;

        for (idx, tool) in tools.iter().enumerate() {
            for key in tool.lookup_keys() {
                let normalized = normalize_key(key);
                if let Some(previous) = tool_index.insert(normalized.clone(), idx) {
                    if previous != idx {
                        let collision = KeyCollision {
                            key: normalized,
                            replaced: tools[previous].key.clone(),
                            winner: tool.key.clone(),
                        };
                        log::warn!(
                            "Catalog key '{}' claimed by both '{}' and '{}'; keeping '{}'",
                            collision.key,
                            collision.replaced,
                            collision.winner,
                            collision.winner
                        );
                        collisions.push(collision);
                    }
                }
            }

            if first_category.is_none() {
                first_category = Some(tool.category.clone());
            }
            categories
                .entry(tool.category.clone())
                .or_default()
                .insert(tool.label.clone());
        }

        let frameworks = frameworks
            .into_iter()
            .map(|starter| (normalize_key(&starter.key), starter))
            .collect();
        let deployments = deployments
            .into_iter()
            .map(|playbook| (normalize_key(&playbook.key), playbook))
            .collect();
        let stacks = stacks
            .into_iter()
            .map(|mut recipe| {
                recipe.keywords = recipe.keywords.iter().map(|k| normalize_key(k)).collect();
                recipe
            })
            .collect();

        Self {
            tools,
            tool_index,
            categories,
            first_category,
            frameworks,
            deployments,
            stacks,
            collisions,
        }
    }

    /// Tool records in authoring order.
    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    /// Stack recipes in matching order.
    pub fn stack_recipes(&self) -> &[StackRecipe] {
        &self.stacks
    }

    /// Normalized keys that more than one record claimed while building the index.
    pub fn key_collisions(&self) -> &[KeyCollision] {
        &self.collisions
    }

    /// Provider keys, sorted.
    pub fn deployment_providers(&self) -> Vec<&str> {
        self.deployments.keys().map(String::as_str).collect()
    }
}

fn parse_document<T: DeserializeOwned>(
    document: &'static str,
    raw: &str,
) -> Result<T, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse { document, source })
}

fn check_schema(document: &'static str, found: u32) -> Result<(), CatalogError> {
    if found != SCHEMA_VERSION {
        return Err(CatalogError::UnsupportedSchema {
            document,
            found,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(())
}
