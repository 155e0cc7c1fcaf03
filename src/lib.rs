//! Text-quality scoring for dyslexia screening: edit distance, four phonetic
//! encoders, a four-feature extractor and a fixed decision tree, plus the
//! pronunciation and dictation scorers built on the same distance engine.

pub mod config;
pub mod distance;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod phonetic;
pub mod pipeline;
pub mod report;
pub mod similarity;

pub use distance::{levenshtein, levenshtein_str};
pub use error::{LexiError, Result};
pub use model::classification::ClassificationResult;
pub use model::fallback::CollaboratorReport;
pub use model::features::FeatureVector;
pub use model::profile::ScoringProfile;
pub use phonetic::{
    PhoneticAlgorithm, PhoneticCodes, caverphone, metaphone, nysiis, phonetic_codes, soundex,
};
pub use pipeline::stage2_features::extract_features;
pub use pipeline::stage3_classify::classify;
pub use pipeline::{Analysis, analyze_text};
pub use report::{BatchSummary, summarize};
pub use similarity::{score_dictation, score_pronunciation};
