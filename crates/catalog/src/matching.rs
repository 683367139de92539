use std::collections::HashSet;

use crate::error::{Argument, LookupError, Result};
use crate::normalize::{flag_enabled, normalize_key, REALTIME_FLAGS};
use crate::store::Catalog;

const GENERIC_SUMMARY: &str = "General purpose full-stack setup suitable for most product MVPs.";
const GENERIC_FRONTEND: &str = "Next.js + Tailwind CSS + Radix Primitives";
const GENERIC_BACKEND: &str =
    "Prisma with a hosted Postgres (Neon) via Supabase connection pooling";
const GENERIC_INFRASTRUCTURE: &str =
    "Deploy frontend and server actions on Vercel; use Turborepo if monorepo grows.";
const GENERIC_EXTRAS: &[&str] = &[
    "Add Auth.js for authentication flows",
    "Add Stripe or Resend depending on payments or email needs",
];

const REALTIME_MARKER: &str = "Socket.IO";
const REALTIME_SUGGESTION: &str = "Integrate Socket.IO or Ably for realtime features";
const BEGINNER_SUGGESTION: &str =
    "Prioritize npm scripts and avoid complex monorepo setups initially";
const SENIOR_SUGGESTION: &str = "Consider Turborepo with pnpm workspaces for scalable builds";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceTier {
    Beginner,
    Intermediate,
    Senior,
}

impl ExperienceTier {
    /// Blank input and unrecognized levels are treated as intermediate.
    pub fn parse(level: &str) -> Self {
        match normalize_key(level).as_str() {
            "beginner" | "junior" => ExperienceTier::Beginner,
            "senior" | "expert" => ExperienceTier::Senior,
            _ => ExperienceTier::Intermediate,
        }
    }

    fn suggestion(self) -> Option<&'static str> {
        match self {
            ExperienceTier::Beginner => Some(BEGINNER_SUGGESTION),
            ExperienceTier::Intermediate => None,
            ExperienceTier::Senior => Some(SENIOR_SUGGESTION),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRecommendation<'a> {
    /// `None` when no recipe matched and the generic stack was used.
    pub recipe_id: Option<&'a str>,
    pub summary: &'a str,
    pub frontend: &'a str,
    pub backend: &'a str,
    pub infrastructure: &'a str,
    pub extras: Vec<String>,
}

impl Catalog {
    /// Pick the first recipe (in authoring order) sharing a keyword with the description.
    pub fn select_stack_recipe(
        &self,
        project: &str,
        experience: &str,
        realtime: &str,
    ) -> Result<StackRecommendation<'_>> {
        if project.trim().is_empty() {
            return Err(LookupError::InvalidArgument(Argument::Project));
        }

        let tokens: HashSet<String> = project.split_whitespace().map(normalize_key).collect();
        let mut recommendation = match self.stacks.iter().find(|recipe| recipe.matches(&tokens)) {
            Some(recipe) => StackRecommendation {
                recipe_id: Some(recipe.id.as_str()),
                summary: &recipe.summary,
                frontend: &recipe.frontend,
                backend: &recipe.backend,
                infrastructure: &recipe.infrastructure,
                extras: recipe.extras.clone(),
            },
            None => generic_recommendation(),
        };

        if flag_enabled(realtime, REALTIME_FLAGS)
            && !recommendation
                .extras
                .iter()
                .any(|extra| extra.contains(REALTIME_MARKER))
        {
            recommendation.extras.push(REALTIME_SUGGESTION.to_string());
        }
        if let Some(suggestion) = ExperienceTier::parse(experience).suggestion() {
            recommendation.extras.push(suggestion.to_string());
        }

        Ok(recommendation)
    }
}

fn generic_recommendation() -> StackRecommendation<'static> {
    StackRecommendation {
        recipe_id: None,
        summary: GENERIC_SUMMARY,
        frontend: GENERIC_FRONTEND,
        backend: GENERIC_BACKEND,
        infrastructure: GENERIC_INFRASTRUCTURE,
        extras: GENERIC_EXTRAS.iter().map(|s| s.to_string()).collect(),
    }
}
