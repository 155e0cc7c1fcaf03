use serde::{Deserialize, Serialize};

/// Feature positions in the fixed order the classifier consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    SpellingAccuracy,
    GrammaticalAccuracy,
    CorrectionPercentage,
    PhoneticAccuracy,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::SpellingAccuracy,
        Feature::GrammaticalAccuracy,
        Feature::CorrectionPercentage,
        Feature::PhoneticAccuracy,
    ];

    pub fn index(self) -> usize {
        match self {
            Feature::SpellingAccuracy => 0,
            Feature::GrammaticalAccuracy => 1,
            Feature::CorrectionPercentage => 2,
            Feature::PhoneticAccuracy => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::SpellingAccuracy => "spelling_accuracy",
            Feature::GrammaticalAccuracy => "grammatical_accuracy",
            Feature::CorrectionPercentage => "correction_percentage",
            Feature::PhoneticAccuracy => "phonetic_accuracy",
        }
    }
}

/// Four text-quality scores, each nominally in `[0, 100]` but not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub spelling_accuracy: f64,
    pub grammatical_accuracy: f64,
    pub correction_percentage: f64,
    pub phonetic_accuracy: f64,
}

impl FeatureVector {
    pub fn from_array(values: [f64; 4]) -> Self {
        let [spelling_accuracy, grammatical_accuracy, correction_percentage, phonetic_accuracy] =
            values;
        Self {
            spelling_accuracy,
            grammatical_accuracy,
            correction_percentage,
            phonetic_accuracy,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.spelling_accuracy,
            self.grammatical_accuracy,
            self.correction_percentage,
            self.phonetic_accuracy,
        ]
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.as_array()[feature.index()]
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

/// The four texts/counts a feature vector is computed from, after fallbacks are applied.
/// All three texts describe the same snapshot of the extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureInputs {
    pub extracted_text: String,
    pub corrected_text: String,
    pub grammar_corrected_text: String,
    pub flagged_token_count: u32,
}

/// Per-algorithm phonetic retention scores, each `(len - distance) / (len + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhoneticScores {
    pub soundex: f64,
    pub metaphone: f64,
    pub caverphone: f64,
    pub nysiis: f64,
}
