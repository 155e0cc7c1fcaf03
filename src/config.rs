use std::path::Path;

use crate::error::{LexiError, Result};
use crate::model::fallback::FlaggedTokenFallback;
use crate::model::profile::ScoringProfile;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Loads a profile from a JSON file, or the built-in profile when no path is given.
/// Missing fields take their built-in values.
pub fn load_profile(path: Option<&Path>) -> Result<ScoringProfile> {
    let Some(path) = path else {
        tracing::debug!("using built-in scoring profile");
        return Ok(ScoringProfile::default_v1());
    };
    if !path.exists() {
        return Err(LexiError::ProfileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    let profile = parse_profile(&raw)?;
    tracing::info!(path = %path.display(), "loaded scoring profile");
    Ok(profile)
}

pub fn parse_profile(raw: &str) -> Result<ScoringProfile> {
    let profile: ScoringProfile = serde_json::from_str(raw)?;
    validate_profile(&profile)?;
    Ok(profile)
}

pub fn validate_profile(profile: &ScoringProfile) -> Result<()> {
    let weights = profile.phonetic_weights;
    if weights.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(LexiError::InvalidConfig(
            "phonetic weights must be finite and non-negative".to_string(),
        ));
    }
    if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(LexiError::InvalidConfig(format!(
            "phonetic weights sum to {}, expected 1.0",
            weights.total()
        )));
    }

    if let FlaggedTokenFallback::Proportional(rate) = profile.fallback.flagged_tokens
        && (!rate.is_finite() || rate < 0.0)
    {
        return Err(LexiError::InvalidConfig(format!(
            "flagged-token fallback rate must be finite and non-negative, got {rate}"
        )));
    }

    let tiers = profile.pronunciation_tiers;
    let cutoffs = [tiers.excellent, tiers.good, tiers.fair];
    let descending = tiers.excellent > tiers.good && tiers.good > tiers.fair;
    if cutoffs.iter().any(|c| !c.is_finite()) || !descending {
        return Err(LexiError::InvalidConfig(
            "pronunciation tier cut-offs must be finite and strictly descending".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
