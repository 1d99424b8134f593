//! Application state.

use std::sync::Arc;
use std::time::Duration;

use camlens_analysis::AnalysisConfig;
use camlens_director::{DirectorClient, DirectorConfig, NarrativeGenerator, PlaceholderNarrator};
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::error::ApiResult;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub analysis: Arc<AnalysisConfig>,
    pub narrator: Arc<dyn NarrativeGenerator>,
    /// Budget for director insight generation per request
    pub narrative_timeout: Duration,
}

impl AppState {
    /// Create state from explicit parts.
    pub fn new(
        config: ApiConfig,
        analysis: AnalysisConfig,
        narrator: Arc<dyn NarrativeGenerator>,
        narrative_timeout: Duration,
    ) -> Self {
        Self {
            config,
            analysis: Arc::new(analysis),
            narrator,
            narrative_timeout,
        }
    }

    /// Create state from environment variables.
    ///
    /// Without an API key the service still runs and every shot gets the
    /// placeholder insight.
    pub fn from_env(config: ApiConfig) -> ApiResult<Self> {
        let analysis = AnalysisConfig::from_env();
        analysis.validate()?;

        let director = DirectorConfig::from_env();
        let narrative_timeout = director.generation_timeout;
        let narrator: Arc<dyn NarrativeGenerator> = if director.is_enabled() {
            info!("Director insights enabled (model {})", director.model);
            Arc::new(DirectorClient::new(director).map_err(|e| {
                crate::error::ApiError::internal(format!("Failed to create director client: {}", e))
            })?)
        } else {
            warn!("ANTHROPIC_API_KEY not set, director insights will be placeholders");
            Arc::new(PlaceholderNarrator)
        };

        Ok(Self::new(config, analysis, narrator, narrative_timeout))
    }
}
