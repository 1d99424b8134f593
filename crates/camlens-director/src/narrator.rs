//! Narrative generation boundary.
//!
//! Shot analysis never depends on narrative generation succeeding: every
//! failure path collapses to a placeholder insight per shot.

use std::time::Duration;

use async_trait::async_trait;
use camlens_models::{DirectorInsight, ShotAnalysis};
use metrics::counter;
use tracing::{info, warn};

use crate::error::DirectorResult;

/// Counter of narrative generations that fell back to placeholders.
pub const NARRATIVE_FALLBACKS_TOTAL: &str = "camlens_narrative_fallbacks_total";

/// Produces director insights for analyzed shots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generator name for logs.
    fn name(&self) -> &'static str;

    /// Generate one insight per shot, in shot order.
    async fn generate(&self, shots: &[ShotAnalysis]) -> DirectorResult<Vec<DirectorInsight>>;
}

/// Generator used when no generation service is configured.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderNarrator;

#[async_trait]
impl NarrativeGenerator for PlaceholderNarrator {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn generate(&self, shots: &[ShotAnalysis]) -> DirectorResult<Vec<DirectorInsight>> {
        Ok(placeholders(shots.len()))
    }
}

/// One placeholder insight per shot.
pub fn placeholders(count: usize) -> Vec<DirectorInsight> {
    vec![DirectorInsight::unavailable(); count]
}

/// Generate insights, degrading to placeholders on any failure.
///
/// The result always has exactly one insight per shot. An empty shot list
/// returns immediately without calling the generator.
pub async fn generate_insights_or_placeholder(
    generator: &dyn NarrativeGenerator,
    shots: &[ShotAnalysis],
    timeout: Duration,
) -> Vec<DirectorInsight> {
    if shots.is_empty() {
        return Vec::new();
    }

    let reason = match tokio::time::timeout(timeout, generator.generate(shots)).await {
        Ok(Ok(insights)) if insights.len() == shots.len() => {
            info!(
                generator = generator.name(),
                shots = shots.len(),
                "Generated director insights"
            );
            return insights;
        }
        Ok(Ok(insights)) => {
            warn!(
                generator = generator.name(),
                "Generator returned {} insights for {} shots, using placeholders",
                insights.len(),
                shots.len()
            );
            "count_mismatch"
        }
        Ok(Err(e)) => {
            warn!(
                generator = generator.name(),
                "Director insight generation failed, using placeholders: {}", e
            );
            e.kind()
        }
        Err(_) => {
            warn!(
                generator = generator.name(),
                "Director insight generation timed out after {:?}, using placeholders", timeout
            );
            "timeout"
        }
    };

    let labels = [("reason", reason.to_string())];
    counter!(NARRATIVE_FALLBACKS_TOTAL, &labels).increment(1);

    placeholders(shots.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectorError;
    use camlens_models::{MotionLabel, Shot, ShotType};

    fn shot(start: f64, end: f64) -> ShotAnalysis {
        ShotAnalysis {
            shot: Shot::new(start, end).unwrap(),
            duration: end - start,
            shot_type: ShotType::Wide,
            primary_motion: MotionLabel::Static,
            secondary_motions: vec![],
            intensity: 0.0,
            dominant_entities: vec![],
            description: "Wide shot".to_string(),
        }
    }

    fn insight(intent: &str) -> DirectorInsight {
        DirectorInsight {
            intent: intent.to_string(),
            technical: "Locked-off frame".to_string(),
            context: String::new(),
            suggestions: vec![],
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let mut generator = MockNarrativeGenerator::new();
        generator.expect_name().return_const("mock");
        generator
            .expect_generate()
            .times(1)
            .returning(|shots| Ok(shots.iter().map(|_| insight("Establish")).collect()));

        let shots = [shot(0.0, 2.0), shot(2.0, 4.0)];
        let insights =
            generate_insights_or_placeholder(&generator, &shots, Duration::from_secs(1)).await;
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].intent, "Establish");
    }

    #[tokio::test]
    async fn test_error_falls_back() {
        let mut generator = MockNarrativeGenerator::new();
        generator.expect_name().return_const("mock");
        generator
            .expect_generate()
            .returning(|_| Err(DirectorError::ServiceUnavailable("overloaded".into())));

        let shots = [shot(0.0, 2.0)];
        let insights =
            generate_insights_or_placeholder(&generator, &shots, Duration::from_secs(1)).await;
        assert_eq!(insights, placeholders(1));
    }

    #[tokio::test]
    async fn test_count_mismatch_falls_back() {
        let mut generator = MockNarrativeGenerator::new();
        generator.expect_name().return_const("mock");
        generator
            .expect_generate()
            .returning(|_| Ok(vec![insight("Only one")]));

        let shots = [shot(0.0, 2.0), shot(2.0, 3.0), shot(3.0, 9.0)];
        let insights =
            generate_insights_or_placeholder(&generator, &shots, Duration::from_secs(1)).await;
        assert_eq!(insights.len(), 3);
        assert!(insights.iter().all(DirectorInsight::is_unavailable));
    }

    #[tokio::test]
    async fn test_empty_shots_skip_generator() {
        let mut generator = MockNarrativeGenerator::new();
        generator.expect_generate().never();

        let insights =
            generate_insights_or_placeholder(&generator, &[], Duration::from_secs(1)).await;
        assert!(insights.is_empty());
    }

    struct SlowNarrator;

    #[async_trait]
    impl NarrativeGenerator for SlowNarrator {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn generate(&self, shots: &[ShotAnalysis]) -> DirectorResult<Vec<DirectorInsight>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(shots.iter().map(|_| insight("Too late")).collect())
        }
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let shots = [shot(0.0, 2.0)];
        let insights =
            generate_insights_or_placeholder(&SlowNarrator, &shots, Duration::from_millis(50))
                .await;
        assert_eq!(insights, placeholders(1));
    }

    #[tokio::test]
    async fn test_placeholder_narrator() {
        let shots = [shot(0.0, 2.0), shot(2.0, 4.0)];
        let insights = PlaceholderNarrator.generate(&shots).await.unwrap();
        assert_eq!(insights, placeholders(2));
    }
}
