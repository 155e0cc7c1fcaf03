use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl FeedbackTier {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "excellent",
            FeedbackTier::Good => "good",
            FeedbackTier::Fair => "fair",
            FeedbackTier::NeedsImprovement => "needs_improvement",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent pronunciation.",
            FeedbackTier::Good => "Good pronunciation with minor differences.",
            FeedbackTier::Fair => "Fair attempt; several sounds differ.",
            FeedbackTier::NeedsImprovement => "Needs improvement; practise this phrase again.",
        }
    }
}

impl std::fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationScore {
    /// Percentage in `[0, 100]`.
    pub accuracy_score: f64,
    /// Legacy ratio `distance / max(1, len(original))`.
    pub inaccuracy: f64,
    pub feedback_tier: FeedbackTier,
    pub edit_distance: usize,
    pub original_len: usize,
    pub attempted_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAccuracyResult {
    pub index: usize,
    pub expected: String,
    pub actual: String,
    pub edit_distance: usize,
    /// Fraction in `[0, 1]`.
    pub accuracy: f64,
    pub exact_match: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictationSummary {
    pub overall_accuracy: f64,
    pub correct_count: usize,
    pub total_count: usize,
    /// Expected words with no typed counterpart.
    pub unanswered_count: usize,
}
