//! Pronunciation and dictation scoring. Both reuse the edit-distance engine and
//! are independent of the feature pipeline.

pub mod dictation;
pub mod pronunciation;

pub use dictation::score_dictation;
pub use pronunciation::{score_pronunciation, score_pronunciation_with};
