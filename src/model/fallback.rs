use serde::{Deserialize, Serialize};

/// What the external collaborators returned for one text. `None` means the
/// collaborator was unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorReport {
    #[serde(default)]
    pub corrected_text: Option<String>,
    #[serde(default)]
    pub grammar_corrected_text: Option<String>,
    #[serde(default)]
    pub flagged_token_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectedTextFallback {
    /// Treat the extracted text as already correct.
    #[default]
    Identity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarTextFallback {
    /// Reuse the spelling-corrected text.
    #[default]
    SpellingCorrected,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlaggedTokenFallback {
    Fixed(u32),
    /// `ceil(word_count * rate)` flagged tokens.
    Proportional(f64),
}

impl Default for FlaggedTokenFallback {
    fn default() -> Self {
        FlaggedTokenFallback::Proportional(0.05)
    }
}

impl FlaggedTokenFallback {
    pub fn estimate(self, word_count: usize) -> u32 {
        match self {
            FlaggedTokenFallback::Fixed(n) => n,
            FlaggedTokenFallback::Proportional(rate) => {
                let raw = (word_count as f64 * rate).ceil();
                if raw.is_finite() && raw > 0.0 {
                    raw.min(u32::MAX as f64) as u32
                } else {
                    0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackPolicy {
    pub corrected_text: CorrectedTextFallback,
    pub grammar_corrected_text: GrammarTextFallback,
    pub flagged_tokens: FlaggedTokenFallback,
}

/// Which collaborator values were substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackUsed {
    CorrectedText,
    GrammarCorrectedText,
    FlaggedTokenCount,
}

impl FallbackUsed {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackUsed::CorrectedText => "corrected_text",
            FallbackUsed::GrammarCorrectedText => "grammar_corrected_text",
            FallbackUsed::FlaggedTokenCount => "flagged_token_count",
        }
    }
}
