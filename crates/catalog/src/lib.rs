//! Curated catalog of web-development tooling.
//!
//! The catalog is built once from bundled JSON documents and is immutable afterwards. All
//! queries are pure functions over it:
//!
//! - [`Catalog::resolve_category`] - category overview or the members of one category
//! - [`Catalog::resolve_tool`] - a tool record by canonical key or alias
//! - [`Catalog::resolve_framework_starter`] - scaffold command for a framework + package manager
//! - [`Catalog::resolve_deployment_playbook`] - deployment checklist for a hosting provider
//! - [`Catalog::select_stack_recipe`] - stack recommendation from a free-text description

mod error;
mod lookup;
mod matching;
mod normalize;
mod store;
mod types;

pub use error::{Argument, CatalogError, Entity, LookupError, Result, SubOption};
pub use lookup::{CategoryListing, CategorySummary, QuickstartPlan, DEFAULT_PACKAGE_MANAGER};
pub use matching::{ExperienceTier, StackRecommendation};
pub use normalize::{flag_enabled, normalize_key, REALTIME_FLAGS};
pub use store::{Catalog, CatalogSources, KeyCollision, FALLBACK_PROVIDER};
pub use types::{DeploymentPlaybook, FrameworkStarter, PackageCommand, StackRecipe, ToolRecord};
