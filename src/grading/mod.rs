//! Grading pipeline
//!
//! Three strictly sequential stages: render the role-specific stat lines,
//! assemble the grading prompt, and parse the model's free-text response
//! into a summary and letter grade. The one suspension point is the
//! generateContent network call.

pub mod gemini;
pub mod parse;
pub mod prompt;

use crate::error::Result;
use crate::stats::PlayerRole;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};

pub use gemini::{GeminiClient, GeminiConfig};
pub use parse::{parse_response, GradeResult, VALID_GRADES};

/// Generative text service boundary
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Runs the stat-formatting → prompt → parse pipeline against an injected
/// text generator.
pub struct Grader {
    generator: Arc<dyn TextGenerator>,
}

impl Grader {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Grade one player season from the submitted stat fields.
    pub async fn analyze(
        &self,
        name: &str,
        year: i64,
        role: PlayerRole,
        stats: &Map<String, Value>,
    ) -> Result<GradeResult> {
        let prompt = prompt::build_prompt(name, year, role, stats);
        let raw = self.generator.generate(&prompt).await?;
        let result = parse_response(&raw);

        if result.grade_detected() {
            info!("Graded {} {} season: {}", name, year, result.grade);
        } else {
            warn!("Grade not detected in model response for {} {}", name, year);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    struct ScriptedGenerator {
        response: String,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.response.clone())
        }
    }

    fn stats(value: Value) -> Map<String, Value> {
        let Value::Object(map) = value else {
            unreachable!()
        };
        map
    }

    #[tokio::test]
    async fn test_analyze_parses_model_response() {
        let generator = Arc::new(ScriptedGenerator {
            response: "SUMMARY:\nElite production.\nGRADE:\nA- Just shy of MVP form.".to_string(),
            prompts: Mutex::new(Vec::new()),
        });
        let grader = Grader::new(generator.clone());

        let result = grader
            .analyze(
                "Aaron Judge",
                2023,
                PlayerRole::Batter,
                &stats(json!({"war": 5.1, "ops": 1.019})),
            )
            .await
            .unwrap();

        assert_eq!(result.summary, "Elite production.");
        assert_eq!(result.grade, "A-");

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Aaron Judge"));
        assert!(prompts[0].contains("MVP-caliber"));
    }

    #[tokio::test]
    async fn test_analyze_pitcher_uses_pitcher_rubric() {
        let generator = Arc::new(ScriptedGenerator {
            response: "SUMMARY:\nAce stuff.\nGRADE:\nA".to_string(),
            prompts: Mutex::new(Vec::new()),
        });
        let grader = Grader::new(generator.clone());

        grader
            .analyze(
                "Gerrit Cole",
                2023,
                PlayerRole::Pitcher,
                &stats(json!({"era": 2.10, "war": 6.5})),
            )
            .await
            .unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("Cy Young-caliber"));
        assert!(prompts[0].contains("ERA: 2.1"));
        assert!(!prompts[0].contains("MVP-caliber"));
    }

    #[tokio::test]
    async fn test_analyze_degrades_without_markers() {
        let generator = Arc::new(ScriptedGenerator {
            response: "An unstructured blob of analysis.".to_string(),
            prompts: Mutex::new(Vec::new()),
        });
        let grader = Grader::new(generator);

        let result = grader
            .analyze("Someone", 2023, PlayerRole::Batter, &stats(json!({})))
            .await
            .unwrap();

        assert_eq!(result.summary, "An unstructured blob of analysis.");
        assert_eq!(result.grade, "");
        assert_eq!(result.grade_text, "Grade not detected.");
    }
}
