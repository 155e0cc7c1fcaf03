use serde::{Deserialize, Serialize};

use crate::model::fallback::FallbackPolicy;
use crate::model::similarity::FeedbackTier;
use crate::model::tree::DecisionTree;
use crate::phonetic::CaverphoneVersion;

/// Fusion weights for the per-algorithm phonetic scores. They must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneticWeights {
    pub caverphone: f64,
    pub soundex: f64,
    pub metaphone: f64,
    pub nysiis: f64,
}

impl Default for PhoneticWeights {
    fn default() -> Self {
        Self {
            caverphone: 0.5,
            soundex: 0.2,
            metaphone: 0.2,
            nysiis: 0.1,
        }
    }
}

impl PhoneticWeights {
    pub fn total(&self) -> f64 {
        self.caverphone + self.soundex + self.metaphone + self.nysiis
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.caverphone, self.soundex, self.metaphone, self.nysiis]
    }
}

/// Lower bounds (inclusive, in percent) of the pronunciation feedback tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierCutoffs {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for TierCutoffs {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            good: 70.0,
            fair: 50.0,
        }
    }
}

impl TierCutoffs {
    pub fn tier(&self, accuracy: f64) -> FeedbackTier {
        if accuracy >= self.excellent {
            FeedbackTier::Excellent
        } else if accuracy >= self.good {
            FeedbackTier::Good
        } else if accuracy >= self.fair {
            FeedbackTier::Fair
        } else {
            FeedbackTier::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    pub phonetic_weights: PhoneticWeights,
    pub caverphone_version: CaverphoneVersion,
    pub fallback: FallbackPolicy,
    pub pronunciation_tiers: TierCutoffs,
    pub tree: DecisionTree,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            phonetic_weights: PhoneticWeights::default(),
            caverphone_version: CaverphoneVersion::Original,
            fallback: FallbackPolicy::default(),
            pronunciation_tiers: TierCutoffs::default(),
            tree: DecisionTree::default_v1(),
        }
    }
}
