//! Prompt construction and response parsing for director insights.

use camlens_models::{DirectorInsight, ShotAnalysis, ANALYSIS_UNAVAILABLE};
use serde_json::Value;
use tracing::warn;

use crate::error::{DirectorError, DirectorResult};

/// Build the director prompt for a sequence of analyzed shots.
pub fn build_director_prompt(shots: &[ShotAnalysis]) -> String {
    let shot_descriptions: Vec<String> = shots
        .iter()
        .enumerate()
        .map(|(i, s)| describe_shot(i, s))
        .collect();

    format!(
        r#"As an experienced film director, analyze this sequence of shots and provide cinematic insights:

{shots}

For each shot, provide:
1. The likely directorial intent
2. Technical execution details
3. How this shot might connect to the overall scene
4. Suggestions for improving or varying the shot

Format your response as a JSON array with exactly {count} objects, one per shot and in the same order.
Each object must have the keys "intent", "technical" and "context" (strings) and "suggestions" (an array of strings).
Respond with the JSON array only."#,
        shots = shot_descriptions.join("\n"),
        count = shots.len(),
    )
}

fn describe_shot(index: usize, shot: &ShotAnalysis) -> String {
    let mut lines = vec![
        format!(
            "Shot {} ({}s - {}s):",
            index + 1,
            shot.shot.start_time,
            shot.shot.end_time
        ),
        format!("- Shot Type: {}", shot.shot_type),
        format!(
            "- Camera Motion: {} (Intensity: {}%)",
            shot.primary_motion,
            (shot.intensity * 100.0).round() as i64
        ),
    ];

    if !shot.secondary_motions.is_empty() {
        let secondary: Vec<&str> = shot.secondary_motions.iter().map(|m| m.as_str()).collect();
        lines.push(format!("- Secondary Motions: {}", secondary.join(", ")));
    }

    let objects: Vec<&str> = shot
        .dominant_entities
        .iter()
        .map(|e| e.label.as_str())
        .filter(|l| !l.is_empty())
        .collect();
    lines.push(format!(
        "- Key Objects: {}",
        if objects.is_empty() {
            "none".to_string()
        } else {
            objects.join(", ")
        }
    ));
    lines.push(format!("- Description: {}", shot.description));

    lines.join("\n") + "\n"
}

/// Remove a surrounding markdown code fence, if any.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Parse the model's reply into exactly `shot_count` insights.
///
/// Elements missing fields get defaults; extra elements are dropped and
/// missing ones are filled with placeholders. Anything that is not a JSON
/// array is an error.
pub fn parse_insights(text: &str, shot_count: usize) -> DirectorResult<Vec<DirectorInsight>> {
    let json_str = strip_code_fences(text);
    let value: Value = serde_json::from_str(json_str).map_err(|e| {
        DirectorError::invalid_response(format!("insights are not valid JSON: {}", e))
    })?;

    let Value::Array(items) = value else {
        return Err(DirectorError::invalid_response(
            "expected a JSON array of insights",
        ));
    };

    if items.len() != shot_count {
        warn!(
            "Director returned {} insights for {} shots",
            items.len(),
            shot_count
        );
    }

    let mut insights: Vec<DirectorInsight> =
        items.iter().take(shot_count).map(insight_from_value).collect();
    insights.resize_with(shot_count, DirectorInsight::unavailable);
    Ok(insights)
}

fn insight_from_value(value: &Value) -> DirectorInsight {
    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    DirectorInsight {
        intent: text("intent").unwrap_or_else(|| ANALYSIS_UNAVAILABLE.to_string()),
        technical: text("technical").unwrap_or_default(),
        context: text("context").unwrap_or_default(),
        suggestions: value
            .get("suggestions")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    }
}
