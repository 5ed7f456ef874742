use crate::error::{RankError, Result};

/// Probability that the surfer follows an outgoing link rather than
/// jumping to a uniformly random page.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default length of the sampling estimator's random walk.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Parameters shared by both rank estimators
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    pub damping: f64,
    pub samples: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl RankConfig {
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        check_samples(self.samples)
    }
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidParameter(format!(
            "damping factor must lie in (0, 1), got {}",
            damping
        )))
    }
}

pub(crate) fn check_samples(samples: usize) -> Result<()> {
    if samples >= 1 {
        Ok(())
    } else {
        Err(RankError::InvalidParameter(
            "sample count must be at least 1".to_string(),
        ))
    }
}
