use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct RecommendStackRequest {
    /// Free-text project description; matched word by word.
    #[schemars(description = "Brief project description, e.g. 'saas dashboard for b2b teams'")]
    pub project: Option<String>,

    /// Experience tier; unknown values read as intermediate
    #[schemars(description = "Experience level: beginner, junior, intermediate (default), senior or expert")]
    pub experience: Option<String>,

    /// Realtime flag
    #[schemars(description = "Set to 'yes', 'true', '1' or 'enabled' when realtime features are needed")]
    pub realtime: Option<String>,
}
