use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

/// Required parameters that may be missing from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Tool,
    Framework,
    Project,
}

fn requirement(argument: &Argument) -> &'static str {
    match argument {
        Argument::Tool => "Tool name is required.",
        Argument::Framework => "Framework name is required.",
        Argument::Project => "Provide a brief project description.",
    }
}

/// Indexed entities a key can fail to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Category,
    Tool,
    Framework,
}

fn not_found(entity: &Entity, input: &str) -> String {
    match entity {
        Entity::Category => format!("Unknown category '{input}'."),
        Entity::Tool => format!("Tool '{input}' is not in the curated catalog."),
        Entity::Framework => format!("Framework '{input}' is not supported."),
    }
}

/// Sub-options of a resolved entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubOption {
    PackageManager,
    Provider,
}

fn unsupported(option: &SubOption, input: &str, available: &[String]) -> String {
    let options = available.join(", ");
    match option {
        SubOption::PackageManager => {
            format!("Package manager '{input}' not supported. Try one of: {options}.")
        }
        SubOption::Provider => {
            format!("Unknown provider '{input}'. Supported providers: {options}.")
        }
    }
}

/// Content-level lookup failures. These are rendered to the caller, never propagated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{}", requirement(.0))]
    InvalidArgument(Argument),

    #[error("{}", not_found(.entity, .input))]
    NotFound { entity: Entity, input: String },

    #[error("{}", unsupported(.option, .input, .available))]
    Unsupported {
        option: SubOption,
        input: String,
        available: Vec<String>,
    },
}

impl LookupError {
    /// Stable snake_case code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::InvalidArgument(_) => "invalid_argument",
            LookupError::NotFound { .. } => "not_found",
            LookupError::Unsupported { .. } => "unsupported",
        }
    }
}

/// Failures while loading catalog documents. Fatal at startup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse {document} catalog: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{document} catalog schema_version {found} is not supported (expected {expected})")]
    UnsupportedSchema {
        document: &'static str,
        found: u32,
        expected: u32,
    },
}
