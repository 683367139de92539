use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A curated tool entry. Identity is `key`; `aliases` resolve to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub key: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub label: String,
    pub category: String,
    pub homepage: String,
    pub summary: String,
    /// Setup commands, in the order they should be run.
    #[serde(default)]
    pub setup: Vec<String>,
}

impl ToolRecord {
    /// Canonical key followed by every alias.
    pub fn lookup_keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCommand {
    pub manager: String,
    pub command: String,
}

/// Scaffold commands for one framework, one per package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkStarter {
    pub key: String,
    pub label: String,
    pub docs: String,
    /// Authoring order is preserved; it is the order alternatives are suggested in.
    pub commands: Vec<PackageCommand>,
    #[serde(default)]
    pub post_install: Vec<String>,
}

impl FrameworkStarter {
    pub fn command_for(&self, manager: &str) -> Option<&str> {
        self.commands
            .iter()
            .find(|entry| entry.manager == manager)
            .map(|entry| entry.command.as_str())
    }

    pub fn managers(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|entry| entry.manager.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPlaybook {
    pub key: String,
    pub label: String,
    pub docs: String,
    pub steps: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRecipe {
    pub id: String,
    /// Lowercase tokens; a description matches when it contains any of them.
    pub keywords: Vec<String>,
    pub summary: String,
    pub frontend: String,
    pub backend: String,
    pub infrastructure: String,
    #[serde(default)]
    pub extras: Vec<String>,
}

impl StackRecipe {
    pub fn matches(&self, tokens: &HashSet<String>) -> bool {
        self.keywords.iter().any(|keyword| tokens.contains(keyword))
    }
}
